//! One render function per route.

use common::model::catalog::{CatalogEntry, CatalogKind};
use common::model::route::Route;
use common::order::{phone_digits, CylinderSize, DeliveryMode, Ownership};
use common::site::{
    yandex_map_url, DEFAULT_REGION, OFFICE_ADDR, PHONE_DISPLAY, PHONE_TEL, PRICE_FROM, PROD_ADDR,
    SLOGAN,
};
use common::storefront::StoreMsg;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::StorefrontComponent;
use super::view::navigate;
use crate::components::calculator::ConsumptionCalculator;
use crate::components::card_grid::CardGrid;

type Link = Scope<StorefrontComponent>;

/// Digits below which the phone field shows a "check the number" hint.
const PLAUSIBLE_PHONE_DIGITS: usize = 10;

pub fn page(component: &StorefrontComponent, link: &Link) -> Html {
    let store = &component.store;
    match store.nav.route {
        Route::Home => home(link),
        Route::Catalog => catalog(component, link),
        Route::Gases => list(component, link, CatalogKind::Gas),
        Route::Solutions => list(component, link, CatalogKind::Solution),
        Route::Services => list(component, link, CatalogKind::Service),
        Route::Equipment => list(component, link, CatalogKind::Equipment),
        Route::GasDetails
        | Route::SolutionDetails
        | Route::ServiceDetails
        | Route::EquipmentDetails => match store.nav.selection {
            Some(entry) => details(link, entry),
            None => html! {},
        },
        Route::Order => order(component, link),
        Route::Contacts => contacts(),
    }
}

fn section_title(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="section-title">
            <h2>{ title.to_string() }</h2>
            if !subtitle.is_empty() {
                <p class="muted">{ subtitle.to_string() }</p>
            }
        </div>
    }
}

fn home(link: &Link) -> Html {
    html! {
        <section class="home">
            <div class="hero">
                <h1>{"Технические и пищевые газы с доставкой"}</h1>
                <p class="hero-slogan">{SLOGAN}</p>
                <p class="muted">{ format!("Заправка баллонов {}. {}", PRICE_FROM, DEFAULT_REGION) }</p>
                <div class="actions">
                    <button type="button" class="btn primary" onclick={navigate(link, Route::Catalog)}>
                        {"Открыть каталог"}
                    </button>
                    <a class="btn ghost" href={PHONE_TEL}>{ PHONE_DISPLAY }</a>
                </div>
            </div>
            <CardGrid columns={4}>
                { for CatalogKind::ALL.into_iter().map(|kind| html! {
                    <button type="button" class="card category" onclick={navigate(link, kind.list_route())}>
                        <h3 class="card-title">{ kind.label() }</h3>
                        <span class="muted">{"Смотреть →"}</span>
                    </button>
                }) }
            </CardGrid>
        </section>
    }
}

fn catalog(component: &StorefrontComponent, link: &Link) -> Html {
    html! {
        <section class="catalog">
            { section_title("Каталог", "Газы, готовые решения, оборудование и услуги") }
            { for CatalogKind::ALL.into_iter().map(|kind| html! {
                <div class="catalog-group">
                    <h3>
                        <button type="button" class="link" onclick={navigate(link, kind.list_route())}>
                            { kind.label() }
                        </button>
                    </h3>
                    <CardGrid columns={3}>
                        { for component.store.catalog.table(kind).iter().map(|entry| entry_card(link, entry)) }
                    </CardGrid>
                </div>
            }) }
        </section>
    }
}

fn list(component: &StorefrontComponent, link: &Link, kind: CatalogKind) -> Html {
    html! {
        <section class="catalog-list">
            { section_title(kind.label(), "") }
            <CardGrid columns={3}>
                { for component.store.catalog.table(kind).iter().map(|entry| entry_card(link, entry)) }
            </CardGrid>
            if kind == CatalogKind::Gas {
                <ConsumptionCalculator />
            }
        </section>
    }
}

fn entry_card(link: &Link, entry: &'static CatalogEntry) -> Html {
    html! {
        <div class="card entry">
            <div class="card-head">
                <h3 class="card-title">{ entry.name }</h3>
                if let Some(formula) = entry.formula {
                    <span class="formula">{ formula }</span>
                }
            </div>
            <p class="muted">{ entry.description }</p>
            { variant_buttons(link, entry) }
            <div class="actions">
                <button
                    type="button"
                    class="btn ghost"
                    onclick={link.callback(move |_| Msg::Store(StoreMsg::OpenDetails(entry)))}
                >
                    {"Подробнее"}
                </button>
                <button
                    type="button"
                    class="btn primary"
                    onclick={start_order(link, entry, None)}
                >
                    {"Заказать"}
                </button>
            </div>
        </div>
    }
}

fn variant_buttons(link: &Link, entry: &'static CatalogEntry) -> Html {
    if entry.variants.is_empty() {
        return html! {};
    }
    html! {
        <div class="tags">
            { for entry.variants.iter().map(|variant| html! {
                <button
                    type="button"
                    class="tag"
                    title="Заказать этот вариант"
                    onclick={start_order(link, entry, Some(*variant))}
                >
                    { *variant }
                </button>
            }) }
        </div>
    }
}

fn details(link: &Link, entry: &'static CatalogEntry) -> Html {
    let items: Vec<&str> = entry.description.split(" • ").collect();

    html! {
        <section class="details">
            <button type="button" class="link" onclick={navigate(link, entry.kind.list_route())}>
                { format!("← {}", entry.kind.label()) }
            </button>
            <div class="card">
                <div class="card-head">
                    <h2 class="card-title">{ entry.name }</h2>
                    if let Some(formula) = entry.formula {
                        <span class="formula">{ formula }</span>
                    }
                </div>
                if items.len() > 1 {
                    <ul class="items">
                        { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                } else {
                    <p>{ entry.description }</p>
                }
                if !entry.variants.is_empty() {
                    <div class="field-label">{"Выберите вариант"}</div>
                }
                { variant_buttons(link, entry) }
                <div class="actions">
                    <button type="button" class="btn primary" onclick={start_order(link, entry, None)}>
                        {"Оставить заявку"}
                    </button>
                </div>
            </div>
        </section>
    }
}

fn order(component: &StorefrontComponent, link: &Link) -> Html {
    let store = &component.store;
    let title = store.product_title();
    let skip_steps = store.skip_order_steps();
    let draft = &store.draft;
    let digits = phone_digits(&draft.phone);

    let on_phone = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Store(StoreMsg::SetPhone(input.value()))
    });
    let on_region = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Store(StoreMsg::SetRegion(input.value()))
    });
    let on_comment = link.callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::Store(StoreMsg::SetComment(input.value()))
    });

    html! {
        <section class="order">
            { section_title("Оформление заявки", "Заполните параметры — мы свяжемся для уточнения деталей") }
            <div class="order-layout">
                <div class="card summary">
                    <h3 class="card-title">{"Что вы заказываете"}</h3>
                    <div class="product">
                        { if title.is_empty() { "Не выбрано".to_string() } else { title } }
                    </div>
                    if let Some(entry) = store.nav.selection {
                        <p class="muted">{ entry.description }</p>
                    } else {
                        <p class="muted">{"Вернитесь в каталог и выберите товар/услугу."}</p>
                    }
                    if let Some(variant) = &store.nav.variant {
                        <div>{"Вариант: "}<strong>{ variant.clone() }</strong></div>
                    }
                </div>
                <div class="order-form">
                    if !skip_steps {
                        <div class="card">
                            <h3 class="card-title">{"1. Выбор тары и формата"}</h3>
                            <div class="field-label">{"Объём баллона"}</div>
                            <div class="choices">
                                { for CylinderSize::ALL.into_iter().map(|size| choice(
                                    format!("{} л", size),
                                    draft.cylinder == Some(size),
                                    link.callback(move |_| Msg::Store(StoreMsg::SetCylinder(size))),
                                )) }
                            </div>
                            <div class="field-label">{"Ваша тара или наша"}</div>
                            <div class="choices">
                                { for Ownership::ALL.into_iter().map(|ownership| choice(
                                    ownership.label().to_string(),
                                    draft.ownership == Some(ownership),
                                    link.callback(move |_| Msg::Store(StoreMsg::SetOwnership(ownership))),
                                )) }
                            </div>
                            <div class="field-label">{"Доставка или самовывоз"}</div>
                            <div class="choices">
                                { for DeliveryMode::ALL.into_iter().map(|delivery| choice(
                                    delivery.label().to_string(),
                                    draft.delivery == Some(delivery),
                                    link.callback(move |_| Msg::Store(StoreMsg::SetDelivery(delivery))),
                                )) }
                            </div>
                        </div>
                    }
                    <div class="card">
                        <h3 class="card-title">
                            { if skip_steps { "Контакты и комментарий" } else { "2. Контакты и комментарий" } }
                        </h3>
                        <input
                            type="tel"
                            placeholder="Телефон для связи"
                            value={draft.phone.clone()}
                            oninput={on_phone}
                        />
                        if digits > 0 && digits < PLAUSIBLE_PHONE_DIGITS {
                            <div class="hint">{"Проверьте номер: похоже, не хватает цифр"}</div>
                        }
                        <input
                            type="text"
                            placeholder="Регион / город"
                            value={draft.region.clone()}
                            oninput={on_region}
                        />
                        <textarea
                            rows="4"
                            placeholder={if skip_steps {
                                "Опишите объект, объёмы, удобное время звонка..."
                            } else {
                                "Дополнительные пожелания: график поставок, примерные объёмы, удобное время звонка..."
                            }}
                            value={draft.comment.clone()}
                            oninput={on_comment}
                        />
                        <div class="actions">
                            <button type="button" class="btn ghost" onclick={navigate(link, Route::Catalog)}>
                                {"← Вернуться в каталог"}
                            </button>
                            <button
                                type="button"
                                class="btn primary"
                                disabled={!store.can_submit()}
                                onclick={link.callback(|_| Msg::Submit)}
                            >
                                { if store.submit.is_pending() { "Отправляем…" } else { "Отправить заявку" } }
                            </button>
                        </div>
                        <p class="muted small">
                            {"Заявка отправляется в Telegram менеджеру. Он уточнит детали, согласует цену и сроки доставки/отгрузки."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn choice(label: String, selected: bool, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button type="button" class={classes!("choice", selected.then_some("selected"))} {onclick}>
            { label }
        </button>
    }
}

fn contacts() -> Html {
    html! {
        <section class="contacts">
            { section_title("Контакты", "Звоните или оставьте заявку на сайте") }
            <CardGrid columns={2}>
                <div class="card">
                    <h3 class="card-title">{"Телефон"}</h3>
                    <a href={PHONE_TEL}>{ PHONE_DISPLAY }</a>
                </div>
                <div class="card">
                    <h3 class="card-title">{"Офис"}</h3>
                    <p>{ OFFICE_ADDR }</p>
                    <a href={yandex_map_url(OFFICE_ADDR)} target="_blank" rel="noopener">{"На карте"}</a>
                </div>
                <div class="card">
                    <h3 class="card-title">{"Производство"}</h3>
                    <p>{ PROD_ADDR }</p>
                    <a href={yandex_map_url(PROD_ADDR)} target="_blank" rel="noopener">{"На карте"}</a>
                </div>
            </CardGrid>
        </section>
    }
}

fn start_order(link: &Link, entry: &'static CatalogEntry, variant: Option<&str>) -> Callback<MouseEvent> {
    let variant = variant.map(str::to_string);
    link.callback(move |_| {
        Msg::Store(StoreMsg::StartOrder {
            entry,
            variant: variant.clone(),
        })
    })
}
