use std::rc::Rc;

use cep_form::field::{CEP_ERROR_ID, FORM_ID, STORED_DATA_ID, SUBMIT_BUTTON_ID};
use cep_form::platform::browser::{
    logger,
    notify::ToastNotifier,
    scheduler::{BrowserReloader, TimerScheduler},
    storage::LocalStorageStore,
};
use cep_form::render::{StoredLine, StoredView};
use cep_form::service::BrasilApiService;
use cep_form::zoon::*;
use cep_form::{
    Collaborators, Dispatch, FieldId, FieldState, FormConfig, FormController, FormEvent, Notification,
    NotificationKind,
};

static FORM_CONFIG_TOML: &str = include_str!("../Form.toml");

const FORM_MAX_WIDTH: u32 = 520;

fn main() {
    logger::init(::log::LevelFilter::Info);
    start_app("app", CepFormApp::new);
}

type Controller = FormController<BrasilApiService>;

#[derive(Clone)]
struct CepFormApp {
    controller: Controller,
    toast: ToastNotifier,
}

impl CepFormApp {
    fn new() -> impl Element {
        let config = FormConfig::from_toml_or_default(FORM_CONFIG_TOML);
        let toast = ToastNotifier::new();
        let controller = FormController::new(
            config.clone(),
            BrasilApiService::new(config.clone()),
            Collaborators {
                store: Rc::new(LocalStorageStore::new(config.storage_key.clone())),
                notifier: Rc::new(toast.clone()),
                scheduler: Rc::new(TimerScheduler),
                reloader: Rc::new(BrowserReloader),
            },
        );
        Self { controller, toast }.root()
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill().max(FORM_MAX_WIDTH))
            .s(Align::new().center_x())
            .s(Padding::all(24))
            .s(Gap::new().y(14))
            .s(Font::new().size(15).color(color!("#1c2333")))
            .item(self.toast())
            .item(
                El::new()
                    .s(Font::new().size(22).weight(FontWeight::SemiBold))
                    .child("Cadastro"),
            )
            .item(self.form())
            .item(self.stored_data_panel())
    }

    fn form(&self) -> impl Element + use<> {
        Column::new()
            .s(Gap::new().y(12))
            .update_raw_el(|raw_el| raw_el.attr("id", FORM_ID))
            .items(FieldId::ALL.map(|field| self.field_input(field)))
            .item(self.submit_button())
    }

    fn field_input(&self, field: FieldId) -> impl Element + use<> {
        let handle = self.controller.form().field(field).clone();
        let controller = self.controller.clone();
        Column::new()
            .s(Gap::new().y(4))
            .item(
                El::new()
                    .s(Font::new().size(13).weight(FontWeight::Medium))
                    .child(field.label()),
            )
            .item(
                TextInput::new()
                    .s(Width::fill())
                    .s(Padding::new().x(12).y(8))
                    .s(RoundedCorners::all(8))
                    .label_hidden(field.label())
                    .placeholder(Placeholder::new(field.label()))
                    .text_signal(handle.value.signal_cloned())
                    .on_change(move |text| dispatch(&controller, FormEvent::Input { field, text }))
                    .update_raw_el(move |raw_el| {
                        raw_el
                            .attr("id", field.key())
                            .class_signal("error", handle.state.signal().map(FieldState::is_error))
                            .class_signal("success", handle.state.signal().map(FieldState::is_success))
                            .style_signal("border", handle.state.signal().map(border_for_state))
                            .attr_signal(
                                "disabled",
                                handle.disabled.signal().map(|disabled| disabled.then_some("disabled")),
                            )
                    }),
            )
            .item((field == FieldId::Cep).then(|| self.cep_error_message()))
    }

    fn cep_error_message(&self) -> impl Element + use<> {
        El::new()
            .s(Font::new().size(13).color(color!("LightCoral")))
            .update_raw_el(|raw_el| raw_el.attr("id", CEP_ERROR_ID))
            .child_signal(
                self.controller
                    .form()
                    .cep_error()
                    .signal_cloned()
                    .map(|message| (!message.is_empty()).then_some(message)),
            )
    }

    fn submit_button(&self) -> impl Element + use<> {
        let enabled = self.controller.form().submit_enabled().clone();
        let controller = self.controller.clone();
        Button::new()
            .s(Padding::new().x(18).y(10))
            .s(RoundedCorners::all(8))
            .s(Font::new().color(color!("#ffffff")).weight(FontWeight::SemiBold))
            .s(Background::new().color_signal(
                enabled
                    .signal()
                    .map_bool(|| color!("#2f6fed"), || color!("#9aa5b8")),
            ))
            .label("Enviar")
            .on_press(move || dispatch(&controller, FormEvent::Submit))
            .update_raw_el(move |raw_el| {
                raw_el.attr("id", SUBMIT_BUTTON_ID).attr_signal(
                    "disabled",
                    enabled.signal().map(|enabled| (!enabled).then_some("disabled")),
                )
            })
    }

    fn toast(&self) -> impl Element + use<> {
        El::new().s(Align::new().center_x()).child_signal(
            self.toast
                .current()
                .signal_cloned()
                .map(|notification| notification.map(toast_card)),
        )
    }

    fn stored_data_panel(&self) -> impl Element + use<> {
        let content = match self.controller.load() {
            StoredView::Empty { message } => Paragraph::new().content(message).unify(),
            StoredView::Stored { heading, lines } => Column::new()
                .s(Gap::new().y(6))
                .item(
                    El::new()
                        .s(Font::new().size(18).weight(FontWeight::SemiBold))
                        .s(Padding::new().bottom(10))
                        .child(heading),
                )
                .items(lines.iter().map(stored_line))
                .unify(),
        };
        El::new()
            .s(Padding::new().top(24))
            .update_raw_el(|raw_el| raw_el.attr("id", STORED_DATA_ID))
            .child(content)
    }
}

/// Route an element event through the controller; lookups run on the task runtime.
fn dispatch(controller: &Controller, event: FormEvent) {
    match controller.dispatch(event) {
        Dispatch::Lookup(pending) => {
            let lookup = controller.lookup().clone();
            Task::start(async move {
                lookup.resolve(pending).await;
            });
        }
        Dispatch::Rejected(error) => ::log::debug!("{error}"),
        Dispatch::Done | Dispatch::Submitted(_) | Dispatch::Loaded(_) => {}
    }
}

fn border_for_state(state: FieldState) -> &'static str {
    match state {
        FieldState::Untouched => "1px solid #c9d1e0",
        FieldState::Error => "1px solid #e5484d",
        FieldState::Success => "1px solid #30a46c",
    }
}

fn toast_card(notification: Notification) -> impl Element {
    let (icon, background) = match notification.kind {
        NotificationKind::Success => ("✔", color!("#30a46c")),
        NotificationKind::Error => ("✖", color!("#e5484d")),
    };
    Row::new()
        .s(Gap::new().x(10))
        .s(Padding::new().x(16).y(12))
        .s(RoundedCorners::all(12))
        .s(Background::new().color(background))
        .s(Font::new().color(color!("#ffffff")).weight(FontWeight::SemiBold))
        .item(icon)
        .item(notification.title)
}

fn stored_line(line: &StoredLine) -> impl Element + use<> {
    let weight = if line.label.is_bold() {
        FontWeight::Bold
    } else {
        FontWeight::Regular
    };
    Paragraph::new()
        .content(
            El::new()
                .s(Font::new().weight(weight))
                .child(format!("{}: ", line.label.text())),
        )
        .content(line.value.clone())
}
