use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Inline banner for the form's last failure. Renders nothing for an empty message.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }

    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="mb-6 p-4 bg-red-500/20 border border-red-500/30 rounded-xl backdrop-blur-sm">
            <p class="text-red-700 font-medium text-center">{&props.message}</p>
        </div>
    }
}
