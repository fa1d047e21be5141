use dioxus::prelude::*;

// Testimonials are the one page with no backing content section; the copy
// lives here in the component.
struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Avery took a vague idea and turned it into a product our whole team \
                relies on daily. Clear communication the entire way through.",
        author: "Dana Whitfield",
        role: "Product Lead, Quorum",
    },
    Testimonial {
        quote: "Rare to find someone equally comfortable debugging a gnarly backend \
                issue and polishing the last few pixels of a UI.",
        author: "Marcus Chen",
        role: "Engineering Manager",
    },
    Testimonial {
        quote: "Delivered ahead of schedule, documented everything, and left the \
                codebase better than they found it.",
        author: "Priya Raman",
        role: "Founder, Trailhead",
    },
];

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Testimonials" }
            p { class: "page-subtitle", "Kind words from people I've worked with." }

            div { class: "card-grid",
                for t in TESTIMONIALS.iter() {
                    div { class: "card quote-card",
                        p { class: "quote-text", "\u{201C}{t.quote}\u{201D}" }
                        p { class: "quote-author", "{t.author}" }
                        p { class: "quote-role", "{t.role}" }
                    }
                }
            }
        }
    }
}
