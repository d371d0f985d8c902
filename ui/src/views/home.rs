use dioxus::prelude::*;

use crate::components::RevealSection;
use crate::insights::EmissionInsightsView;
use crate::predict::PredictorView;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__title", "Know your car before you buy it" }
                p { class: "hero__lede",
                    "Pick a model year, manufacturer, transmission and fuel. Ecometer predicts fuel use, running cost and CO₂ output from fleet data."
                }
                a { class: "button button--primary", href: "#predictor", "Start predicting" }
            }

            RevealSection { id: "predictor",
                h2 { "Predict consumption & emissions" }
                PredictorView {}
            }

            RevealSection { id: "insights", EmissionInsightsView {} }

            RevealSection { id: "about", class: "page-home__section page-home__about",
                h2 { "About" }
                p {
                    "Predictions come from a model trained on official fuel consumption ratings for vehicles sold from 2017 to 2025. Figures are estimates for comparison, not guarantees."
                }
                ul { class: "page-home__features",
                    li { "Combined, city and highway fuel use in L/100 km" }
                    li { "CO₂ output, CO₂ and smog ratings, and an overall eco score" }
                    li { "Annual fuel cost, CO₂ tax and cost per passenger-km" }
                }
            }
        }
    }
}
