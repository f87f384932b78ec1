// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{options::PageKind, state::AppState},
    session::SessionTable,
    store::{DataSet, Loaded},
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Review Sentiment Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Banner shown above the page until the next action replaces it.
#[derive(Clone, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // reviews accumulated across Extract clicks
    pub session: SessionTable,

    // table loaded on the Analysis page from a file or sheet
    pub input: Option<Loaded>,

    // latest labeled table (Analysis → Visualize)
    pub results: Option<DataSet>,

    pub status: String,
    pub notices: Vec<Notice>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: default page={:?}", router::all_pages()[state.gui.current_page_index].kind());
        Self {
            state,
            session: SessionTable::new(),
            input: None,
            results: None,
            status: s!("Idle"),
            notices: Vec::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    pub fn go_to(&mut self, kind: PageKind) {
        let prev = self.current_page_kind();
        if prev == kind { return; }
        self.state.gui.current_page_index = router::index_of(kind);
        self.notices.clear();
        logf!("UI: Page switch {:?} → {:?}", prev, kind);
        router::page_for(kind).on_enter(self);
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Drop previous banners; a new action is starting.
    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }

    pub fn notify<T: Into<String>>(&mut self, level: NoticeLevel, text: T) {
        self.notices.push(Notice { level, text: text.into() });
    }

    pub fn success<T: Into<String>>(&mut self, text: T) { self.notify(NoticeLevel::Success, text) }
    pub fn info<T: Into<String>>(&mut self, text: T) { self.notify(NoticeLevel::Info, text) }
    pub fn warn<T: Into<String>>(&mut self, text: T) { self.notify(NoticeLevel::Warning, text) }
    pub fn error<T: Into<String>>(&mut self, text: T) { self.notify(NoticeLevel::Error, text) }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Session rows: {}", self.session.len()));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            ui.separator();

            components::notice::draw(ui, &self.notices);

            page.draw(ui, self);
        });
    }
}
