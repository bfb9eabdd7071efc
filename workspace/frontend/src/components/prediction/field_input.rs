use common::Pollutant;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub pollutant: Pollutant,
    pub value: String,
    /// Text color class of the label, following the current category.
    pub label_class: &'static str,
    pub on_change: Callback<(Pollutant, String)>,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let oninput = {
        let pollutant = props.pollutant;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((pollutant, input.value()));
        })
    };

    html! {
        <div class="group">
            <label class={classes!("block", "text-sm", "font-semibold", "mb-2", "transition-colors", "duration-300", props.label_class)}>
                {props.pollutant.label()}
            </label>
            <input
                type="number"
                name={props.pollutant.key()}
                value={props.value.clone()}
                {oninput}
                step="0.01"
                min="0"
                placeholder="0.00"
                class="w-full px-4 py-3 rounded-xl border-2 border-white/30 bg-white/20 backdrop-blur-sm focus:border-white/60 focus:bg-white/30 focus:outline-none focus:ring-4 focus:ring-white/20 placeholder-gray-500 text-gray-800 font-medium transition-all duration-300 group-hover:border-white/40"
            />
        </div>
    }
}
