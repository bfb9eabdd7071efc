use common::Classification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultCardProps {
    pub prediction: f64,
    pub classification: Classification,
}

/// The predicted index rounded for display, with its category.
#[function_component(ResultCard)]
pub fn result_card(props: &ResultCardProps) -> Html {
    let text = props.classification.style().text;
    let rounded = (props.prediction + 0.5).floor();

    html! {
        <div class="animate-bounce-subtle">
            <div class="backdrop-blur-lg bg-white/20 border border-white/30 rounded-2xl p-8 shadow-glass">
                <div class="text-center">
                    <h2 class={classes!("text-2xl", "md:text-3xl", "font-bold", "mb-4", text)}>
                        {"🎯 Prediction Result"}
                    </h2>
                    <div class="bg-white/30 backdrop-blur-sm rounded-xl p-6 mb-4">
                        <div class={classes!("text-5xl", "md:text-6xl", "font-bold", "mb-2", text)}>
                            {rounded.to_string()}
                        </div>
                        <div class={classes!("text-xl", "md:text-2xl", "font-semibold", text)}>
                            {"Air Quality Index"}
                        </div>
                    </div>
                    <div class={classes!("text-lg", "md:text-xl", "font-semibold", text)}>
                        {format!("Category: {}", props.classification)}
                    </div>
                </div>
            </div>
        </div>
    }
}
