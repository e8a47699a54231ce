use leptos::prelude::*;

use crate::view_tree::FooterView;

#[component]
pub fn Footer(footer: FooterView) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__credit">
                "Built by " <span class="footer__name">{footer.credit}</span>
            </p>
        </footer>
    }
}
