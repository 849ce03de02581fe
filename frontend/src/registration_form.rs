use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use shared::catalog::{ACTIVITIES, CLASSES};
use shared::validation::{MAX_ADDRESS_LENGTH, MAX_NAME_LENGTH};
use shared::{Field, RegistrationDraft, RegistrationRecord};
use crate::{config::CONFIG, reveal::Reveal, styles::*};

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub dark: bool,
    pub on_submit: Callback<RegistrationRecord>,
}

pub struct RegistrationForm {
    draft: RegistrationDraft,
    error: Option<String>,
}

pub enum Msg {
    UpdateField(Field, String),
    Submit,
}

impl Component for RegistrationForm {
    type Message = Msg;
    type Properties = RegistrationFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateField(field, value) => {
                self.draft.set(field, value);
                self.error = None;
                true
            }
            Msg::Submit => {
                match self.draft.submit(CONFIG.today()) {
                    Ok(record) => {
                        info!(
                            "registration submitted: {}",
                            serde_json::to_string(&record).unwrap_or_default()
                        );
                        self.error = None;
                        ctx.props().on_submit.emit(record);
                    }
                    Err(err) => {
                        warn!("registration rejected: {}", err);
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dark = ctx.props().dark;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let class_options: Vec<(String, String)> = CLASSES.iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect();
        let activities: Vec<(String, String)> = ACTIVITIES.iter()
            .map(|a| (a.id.to_string(), a.name.to_string()))
            .collect();

        html! {
            <Reveal class={classes!(CONTAINER)}>
                <h2 class={HEADING_SECTION}>{"Form Pendaftaran"}</h2>
                <p class={classes!("text-center", "max-w-2xl", "mx-auto", "mb-12", muted(dark))}>
                    {"Isi data di bawah ini dengan lengkap dan benar."}
                </p>
                <div class={classes!(CONTAINER_NARROW, panel(dark))}>
                    <form {onsubmit} class="space-y-6">
                        {self.render_input(ctx, Field::FullName, "Nama Lengkap", "text", Some(MAX_NAME_LENGTH))}
                        {self.render_input(ctx, Field::Nisn, "NISN", "number", None)}
                        {self.render_select(ctx, Field::StudentClass, "Kelas & Jurusan", "Pilih Kelas...", class_options)}
                        {self.render_input(ctx, Field::Address, "Alamat Rumah", "text", Some(MAX_ADDRESS_LENGTH))}
                        {self.render_select(ctx, Field::Activity, "Pilihan Ekstrakurikuler", "Pilih Ekstrakurikuler...", activities)}

                        {if let Some(error) = &self.error {
                            html! { <div class={alert_style("error")}>{error}</div> }
                        } else { html! {} }}

                        <button type="submit" class={combine_classes(&button_primary(true), "font-bold duration-300")}>
                            {"Kirim Pendaftaran"}
                        </button>
                    </form>
                </div>
            </Reveal>
        }
    }
}

fn field_id(field: Field) -> &'static str {
    match field {
        Field::FullName => "fullName",
        Field::Nisn => "nisn",
        Field::StudentClass => "studentClass",
        Field::Address => "address",
        Field::Activity => "extracurricular",
    }
}

impl RegistrationForm {
    fn render_input(&self, ctx: &Context<Self>, field: Field, text: &str, kind: &'static str, max_length: Option<usize>) -> Html {
        let dark = ctx.props().dark;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateField(field, input.value())
        });

        html! {
            <div>
                <label for={field_id(field)} class={label(dark)}>{text}</label>
                <input id={field_id(field)} type={kind} required=true
                    value={self.draft.get(field).to_string()}
                    maxlength={max_length.map(|max| max.to_string())}
                    class={input(dark)} {oninput} />
            </div>
        }
    }

    fn render_select(
        &self,
        ctx: &Context<Self>,
        field: Field,
        text: &str,
        placeholder: &str,
        options: Vec<(String, String)>,
    ) -> Html {
        let dark = ctx.props().dark;
        let current = self.draft.get(field).to_string();
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::UpdateField(field, select.value())
        });

        html! {
            <div>
                <label for={field_id(field)} class={label(dark)}>{text}</label>
                <select id={field_id(field)} required=true class={input(dark)} {onchange}>
                    <option value="" disabled=true selected={current.is_empty()}>{placeholder}</option>
                    {for options.into_iter().map(|(value, name)| {
                        let selected = value == current;
                        html! { <option {value} {selected}>{name}</option> }
                    })}
                </select>
            </div>
        }
    }
}
