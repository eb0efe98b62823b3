//! View rendering for the storefront: header with catalog dropdowns, the
//! page selected by the current route, the order notice and the footer.

use common::model::catalog::CatalogKind;
use common::model::route::Route;
use common::order::NoticeKind;
use common::site::{BRAND, PHONE_DISPLAY, PHONE_TEL, SLOGAN};
use common::storefront::StoreMsg;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::pages;
use super::state::StorefrontComponent;

pub fn view(component: &StorefrontComponent, ctx: &Context<StorefrontComponent>) -> Html {
    let link = ctx.link();
    let onkeydown = link.batch_callback(|e: KeyboardEvent| {
        (e.key() == "Escape").then_some(Msg::Store(StoreMsg::CloseMenus))
    });

    html! {
        <div class="storefront" {onkeydown}>
            { build_header(component, link) }
            <main class="page">
                { pages::page(component, link) }
            </main>
            { build_notice(component) }
            { build_footer() }
        </div>
    }
}

fn build_header(component: &StorefrontComponent, link: &Scope<StorefrontComponent>) -> Html {
    let store = &component.store;
    let nav_class = if store.mobile_nav_open { "main-nav open" } else { "main-nav" };

    html! {
        <header class="site-header">
            <button
                type="button"
                class="brand"
                title="На главную"
                onclick={navigate(link, Route::Home)}
            >
                <span class="brand-text">
                    <span class="brand-name">{BRAND}</span>
                    <span class="brand-slogan">{SLOGAN}</span>
                </span>
            </button>
            <button
                type="button"
                class="mobile-toggle"
                aria-label="Меню"
                onclick={link.callback(|_| Msg::Store(StoreMsg::ToggleMobileNav))}
            >
                <i class="material-icons">{ if store.mobile_nav_open { "close" } else { "menu" } }</i>
            </button>
            <nav class={nav_class}>
                { nav_button(link, Route::Home, store.nav.route) }
                { for CatalogKind::ALL.into_iter().map(|kind| dropdown(component, link, kind)) }
                { nav_button(link, Route::Contacts, store.nav.route) }
                <a class="header-phone" href={PHONE_TEL}>{PHONE_DISPLAY}</a>
            </nav>
        </header>
    }
}

fn nav_button(link: &Scope<StorefrontComponent>, route: Route, current: Route) -> Html {
    let class = if route == current { "nav-btn active" } else { "nav-btn" };
    html! {
        <button type="button" class={class} onclick={navigate(link, route)}>
            { route.title() }
        </button>
    }
}

/// Catalog dropdown. The first click opens it; a second click on the same
/// button goes to the full list.
fn dropdown(
    component: &StorefrontComponent,
    link: &Scope<StorefrontComponent>,
    kind: CatalogKind,
) -> Html {
    let store = &component.store;
    let open = store.open_menu == Some(kind);
    let active = store.nav.route == kind.list_route()
        || store.nav.route == kind.detail_route()
        || (store.nav.route == Route::Order && store.nav.selected_kind() == Some(kind));

    let onclick = if open {
        navigate(link, kind.list_route())
    } else {
        link.callback(move |_| Msg::Store(StoreMsg::ToggleMenu(kind)))
    };

    html! {
        <div class="dropdown">
            <button
                type="button"
                class={classes!("nav-btn", active.then_some("active"))}
                aria-expanded={open.to_string()}
                {onclick}
            >
                { kind.label() }
                <i class="material-icons">{ if open { "expand_less" } else { "expand_more" } }</i>
            </button>
            if open {
                <div class="dropdown-menu">
                    { for store.catalog.table(kind).iter().map(|entry| html! {
                        <button
                            type="button"
                            class="dropdown-item"
                            onclick={link.callback(move |_| Msg::Store(StoreMsg::OpenDetails(entry)))}
                        >
                            { entry.name }
                        </button>
                    }) }
                    <button type="button" class="dropdown-item all" onclick={navigate(link, kind.list_route())}>
                        { format!("Все: {}", kind.label().to_lowercase()) }
                    </button>
                </div>
            }
        </div>
    }
}

fn build_notice(component: &StorefrontComponent) -> Html {
    let Some(notice) = &component.store.notice else {
        return html! {};
    };
    let class = match notice.kind {
        NoticeKind::Success => "notice success",
        NoticeKind::Error => "notice error",
    };

    html! {
        <div class={class} role="status">
            <div class="notice-title">{ notice.title }</div>
            <div class="notice-description">{ notice.description }</div>
        </div>
    }
}

fn build_footer() -> Html {
    let year = super::helpers::now().format("%Y").to_string();
    html! {
        <footer class="site-footer">
            <div>{ format!("© {} {}. Все права защищены.", year, BRAND) }</div>
            <div class="muted">{"Промышленные и пищевые газы, оборудование и сервис."}</div>
        </footer>
    }
}

/// Callback that moves to `route`.
pub fn navigate(link: &Scope<StorefrontComponent>, route: Route) -> Callback<MouseEvent> {
    link.callback(move |_| Msg::Store(StoreMsg::Navigate(route)))
}
