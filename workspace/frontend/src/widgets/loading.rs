use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingLabelProps {
    pub text: AttrValue,
}

/// Small white spinner followed by a label, sized to sit inside a button.
#[function_component(LoadingLabel)]
pub fn loading_label(props: &LoadingLabelProps) -> Html {
    html! {
        <div class="flex items-center justify-center">
            <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-white mr-3"></div>
            {props.text.clone()}
        </div>
    }
}
