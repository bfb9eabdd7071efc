use common::AqiCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LegendProps {
    pub heading_class: &'static str,
}

#[function_component(CategoryLegend)]
pub fn category_legend(props: &LegendProps) -> Html {
    html! {
        <div class="mt-12 text-center">
            <div class="backdrop-blur-lg bg-white/10 border border-white/20 rounded-2xl p-6 max-w-4xl mx-auto">
                <h3 class={classes!("text-xl", "font-bold", "mb-4", props.heading_class)}>
                    {"AQI Categories"}
                </h3>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm">
                    { for AqiCategory::ALL.iter().map(|category| {
                        let style = category.style();
                        html! {
                            <div class={classes!("bg-gradient-to-r", style.gradient, style.text, "p-3", "rounded-lg", "font-semibold")}>
                                {category.legend()}
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
