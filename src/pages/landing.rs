//! Landing page: every section in scroll order between header and footer.

use dioxus::prelude::*;
use sudeva_core::content::{CONSTRUCTION, CONSTRUCTION_HEADING, SOLAR_HEADING, SOLAR_SOLUTIONS};

use crate::components::{
    About, Contact, Footer, Hero, Knowledge, NavHeader, Projects, Services, Showcase, Team, WhyUs,
};

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page",
            NavHeader {}
            main { class: "page-main",
                Hero {}
                WhyUs {}
                Services {}
                Showcase { heading: SOLAR_HEADING, cards: SOLAR_SOLUTIONS.to_vec() }
                Showcase { heading: CONSTRUCTION_HEADING, cards: CONSTRUCTION.to_vec(), dark: true }
                Projects {}
                Knowledge {}
                About {}
                Team {}
                Contact {}
            }
            Footer {}
        }
    }
}
