//! Breadcrumb Trail
//!
//! Links back up the hierarchy; the last crumb is the current page.

use leptos::prelude::*;

/// One step of the trail
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current page
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[component]
pub fn Breadcrumbs(crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav class="breadcrumbs">
            {crumbs
                .into_iter()
                .enumerate()
                .map(|(index, crumb)| {
                    let step = match crumb.href {
                        Some(href) => view! { <a class="crumb-link" href=href>{crumb.label}</a> }.into_any(),
                        None => view! { <span class="crumb-current">{crumb.label}</span> }.into_any(),
                    };
                    view! {
                        {step}
                        {(index < last).then(|| view! { <span class="crumb-separator">"/"</span> })}
                    }
                })
                .collect_view()}
        </nav>
    }
}
