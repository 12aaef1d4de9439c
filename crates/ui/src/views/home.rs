use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let origin = ctx.clue_origin().to_string();

    rsx! {
        div { class: "page",
            h2 { "How to play" }
            ol { class: "rules",
                li { "Press Start to draw ten random clues." }
                li { "You have 45 seconds per question. The clock turns red at 10." }
                li { "Type your answer and press Submit or Enter. Phrasing like \"What is ...\" is fine." }
                li { "Wrong answers can be retried until time runs out. Next skips a question." }
            }
            p { class: "muted", "Clues from {origin}" }
            Link { class: "btn btn-primary", to: Route::Play {}, "Play" }
        }
    }
}
