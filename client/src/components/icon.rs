//! Stylesheet-driven icon glyph.

use leptos::prelude::*;

use crate::util::icon::IconName;

#[component]
pub fn Icon(name: IconName) -> impl IntoView {
    view! { <span class=name.css_class() aria-hidden="true"></span> }
}
