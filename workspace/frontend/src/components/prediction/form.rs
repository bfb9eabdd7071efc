use common::{FormAction, NEUTRAL_STYLE, Pollutant};
use yew::prelude::*;

use super::field_input::FieldInput;
use super::legend::CategoryLegend;
use super::result_card::ResultCard;
use crate::api_client;
use crate::hooks::FormStore;
use crate::widgets::{ErrorBanner, LoadingLabel};

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let store = use_reducer(FormStore::default);

    let on_field_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |(pollutant, value): (Pollutant, String)| {
            dispatcher.dispatch(FormAction::UpdateField { pollutant, value });
        })
    };

    let on_predict = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| match store.fields.to_payload() {
            Err(err) => {
                log::debug!("Prediction blocked, empty fields: {:?}", err.missing);
                store.dispatch(FormAction::SubmitRejected(err));
            }
            Ok(payload) => {
                store.dispatch(FormAction::SubmitStarted);
                let dispatcher = store.dispatcher();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = api_client::predict(&payload).await;
                    dispatcher.dispatch(FormAction::SubmitFinished(outcome));
                });
            }
        })
    };

    let on_reset = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| {
            log::debug!("User reset the form");
            dispatcher.dispatch(FormAction::Reset);
        })
    };

    let classification = store.classification();
    let (page_style, subtitle_class, label_class) = if store.prediction.is_some() {
        let style = classification.style();
        (style, style.text, style.text)
    } else {
        (NEUTRAL_STYLE, "text-gray-600", "text-gray-700")
    };

    html! {
        <div class={classes!("min-h-screen", "transition-all", "duration-1000", "bg-gradient-to-br", page_style.gradient)}>
            <div class="container mx-auto px-4 py-8">
                <div class="text-center mb-8">
                    <h1 class={classes!("text-4xl", "md:text-5xl", "font-bold", "mb-4", "transition-colors", "duration-700", page_style.text)}>
                        {"🌬️ AQI Predictor"}
                    </h1>
                    <p class={classes!("text-lg", "md:text-xl", "transition-colors", "duration-700", subtitle_class)}>
                        {"Enter pollutant concentrations to predict Air Quality Index"}
                    </p>
                </div>

                <div class="max-w-6xl mx-auto">
                    <div class="backdrop-blur-lg bg-white/10 border border-white/20 rounded-3xl p-6 md:p-8 shadow-glass hover:shadow-glass-hover transition-all duration-300">
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                            { for store.fields.iter().map(|(pollutant, value)| html! {
                                <FieldInput
                                    key={pollutant.key()}
                                    {pollutant}
                                    value={value.to_string()}
                                    {label_class}
                                    on_change={on_field_change.clone()}
                                />
                            })}
                        </div>

                        <ErrorBanner message={store.error.clone()} />

                        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-8">
                            <button
                                onclick={on_predict}
                                disabled={store.loading}
                                class="w-full sm:w-auto px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white font-bold rounded-xl shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none focus:outline-none focus:ring-4 focus:ring-blue-300"
                            >
                                {if store.loading {
                                    html! { <LoadingLabel text="Predicting..." /> }
                                } else {
                                    html! { {"🔮 Predict AQI"} }
                                }}
                            </button>

                            <button
                                onclick={on_reset}
                                class="w-full sm:w-auto px-8 py-4 bg-white/20 hover:bg-white/30 backdrop-blur-sm border border-white/30 font-semibold rounded-xl transition-all duration-300 hover:shadow-lg transform hover:scale-105 focus:outline-none focus:ring-4 focus:ring-white/20"
                            >
                                {"🔄 Reset"}
                            </button>
                        </div>

                        {if let Some(prediction) = store.prediction {
                            html! { <ResultCard {prediction} {classification} /> }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>

                <CategoryLegend heading_class={page_style.text} />
            </div>
        </div>
    }
}
