//! Welding gas consumption calculator shown on the gases page.
//!
//! Self-contained: keeps its own inputs and recomputes the estimate from
//! `common::model::consumption` on every change.

use common::model::consumption::{ConsumptionInput, CYLINDER_VOLUME_M3};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

#[derive(Clone, Copy)]
pub enum Field {
    Current,
    Flow,
    HoursPerDay,
    DaysPerMonth,
}

pub enum Msg {
    Set(Field, f64),
}

pub struct ConsumptionCalculator {
    input: ConsumptionInput,
}

impl Component for ConsumptionCalculator {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            input: ConsumptionInput::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Set(field, value) = msg;
        let slot = match field {
            Field::Current => &mut self.input.current_a,
            Field::Flow => &mut self.input.flow_l_min,
            Field::HoursPerDay => &mut self.input.hours_per_day,
            Field::DaysPerMonth => &mut self.input.days_per_month,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let estimate = self.input.estimate();

        html! {
            <div class="card calculator">
                <h3 class="card-title">{"Калькулятор расхода газа"}</h3>
                <p class="muted">
                    {"Оцените, сколько газа потребуется при сварке. Цифры примерные, но хорошо помогают планировать поставки."}
                </p>
                <div class="calculator-fields">
                    { number_field(link, Field::Current, "Сварочный ток, А", self.input.current_a, (10, 400)) }
                    { number_field(link, Field::Flow, "Расход газа, л/мин", self.input.flow_l_min, (5, 30)) }
                    { number_field(link, Field::HoursPerDay, "Часов сварки в день", self.input.hours_per_day, (1, 24)) }
                    { number_field(link, Field::DaysPerMonth, "Дней в месяц", self.input.days_per_month, (1, 31)) }
                </div>
                <div class="calculator-result">
                    <div>
                        <div class="muted">{"Расход за месяц"}</div>
                        <div class="figure">{ format!("{:.1} м³", estimate.monthly_m3) }</div>
                    </div>
                    <div>
                        <div class="muted">
                            { format!("Ориентировочно баллонов 40 л (150 атм, ≈{} м³)", CYLINDER_VOLUME_M3) }
                        </div>
                        <div class="figure">{ format!("{} шт", estimate.cylinders) }</div>
                    </div>
                    <div class="muted small">
                        {"Для точного подбора учтём режимы, тип шва и газ. Оставьте заявку — менеджер уточнит детали."}
                    </div>
                </div>
            </div>
        }
    }
}

fn number_field(
    link: &Scope<ConsumptionCalculator>,
    field: Field,
    label: &str,
    value: f64,
    (min, max): (u32, u32),
) -> Html {
    // Empty or unparsable input counts as zero.
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Set(field, input.value().parse().unwrap_or(0.0))
    });

    html! {
        <label class="field">
            <span class="field-label">{ label.to_string() }</span>
            <input
                type="number"
                min={min.to_string()}
                max={max.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}
