//! HTML adapter for rendered navigation elements.
//!
//! Uses [maud](https://maud.lambda.xyz/) so every label and href is escaped at
//! interpolation. The output is a self-contained `<nav>` landmark:
//!
//! ```html
//! <nav class="header-nav" aria-label="Main">
//!   <ul>
//!     <li><a href="/about" aria-label="About">About</a></li>
//!     <li><a href="https://github.com/x" target="_blank" rel="noopener noreferrer" aria-label="GitHub">GitHub</a></li>
//!     <li><a class="search" href="/search" aria-label="Search"><svg ...></svg><span class="sr-only">Search</span></a></li>
//!   </ul>
//! </nav>
//! ```

use crate::config::NavMarkupConfig;
use crate::render::{ElementRole, RenderedElement, TextVisibility};
use crate::types::Appearance;
use maud::{Markup, PreEscaped, html};

const SEARCH_ICON: &str = r#"<svg class="icon" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true" focusable="false"><circle cx="11" cy="11" r="7"/><line x1="16.5" y1="16.5" x2="21" y2="21"/></svg>"#;

/// Render the `<nav>` landmark for a list of elements.
pub fn render_header_nav(elements: &[RenderedElement], nav: &NavMarkupConfig) -> Markup {
    html! {
        nav class=(nav.class) aria-label=(nav.aria_label) {
            ul {
                @for element in elements {
                    li { (render_element(element)) }
                }
            }
        }
    }
}

/// Render one element as an `<a>`.
pub fn render_element(element: &RenderedElement) -> Markup {
    let class = match (element.role, element.appearance) {
        (ElementRole::Search, _) => Some("search"),
        (ElementRole::Link, Appearance::Button) => Some("button"),
        (ElementRole::Link, Appearance::Link) => None,
    };

    html! {
        a class=[class]
            href=(element.href)
            target=[element.attr("target")]
            rel=[element.attr("rel")]
            aria-label=[element.attr("aria-label")]
            aria-current=[element.attr("aria-current")] {
            @match element.text_visibility {
                TextVisibility::Visible => { (element.text) },
                TextVisibility::ScreenReaderOnly => {
                    @if element.role == ElementRole::Search {
                        (PreEscaped(SEARCH_ICON))
                    }
                    span.sr-only { (element.text) }
                },
            }
        }
    }
}
