// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
    time::Instant,
};

use eframe::egui;

use crate::{
    cart::{Cart, CartItem},
    config::{options::DomainKind, state::AppState},
    pipeline::Selection,
    record::Record,
    render::ResultsView,
    store,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Employer Directory",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-domain canonical data (write-once at load, read-only after)
    pub datasets: HashMap<DomainKind, Arc<Vec<Record>>>,
    pub load_errors: HashMap<DomainKind, String>,

    // facet cascade state, one per domain
    pub selections: HashMap<DomainKind, Selection>,
    /// Populated option lists, index = stage. Entries exist only for the
    /// stages whose upstream slots are bound; everything deeper is stale
    /// and absent.
    pub stage_options: HashMap<DomainKind, Vec<Vec<String>>>,
    pub results: HashMap<DomainKind, ResultsView>,
    pub result_errors: HashMap<DomainKind, String>,

    // status/progress (fetch progress writes here)
    pub status: Arc<Mutex<String>>,

    // copy-ack timers, keyed by copied href
    pub copied: HashMap<String, Instant>,

    // market page
    pub cart: Cart,
    pub cart_items: Vec<CartItem>,
    pub market_qty: HashMap<&'static str, u32>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Loading datasets…")));

        let mut app = Self {
            state,
            datasets: HashMap::new(),
            load_errors: HashMap::new(),
            selections: HashMap::new(),
            stage_options: HashMap::new(),
            results: HashMap::new(),
            result_errors: HashMap::new(),
            status: Arc::clone(&status),
            copied: HashMap::new(),
            cart: Cart::default_location(),
            cart_items: Vec::new(),
            market_qty: HashMap::new(),
        };

        app.cart_items = app.cart.items();

        // Load every domain up front. Facet wiring stays inert for a
        // domain until its load resolved (hard ordering dependency).
        for kind in DomainKind::ALL {
            app.load_domain(kind, false);
        }

        app.status("Ready");
        logf!(
            "Init: domains loaded={}, failed={}",
            app.datasets.len(),
            app.load_errors.len()
        );
        app
    }

    /// (Re)load one domain's dataset and reset its cascade.
    pub fn load_domain(&mut self, kind: DomainKind, refresh: bool) {
        let mut prog = super::progress::GuiProgress::new(Arc::clone(&self.status));
        let data_dir = self.state.options.data_dir.clone();

        match store::load_or_fetch(kind, &data_dir, refresh, Some(&mut prog)) {
            Ok(records) => {
                logf!("Load: {:?} ok ({} records)", kind, records.len());
                self.load_errors.remove(&kind);
                self.datasets.insert(kind, Arc::new(records));
                self.reset_cascade(kind);
            }
            Err(e) => {
                loge!("Load: {:?} failed: {}", kind, e);
                self.datasets.remove(&kind);
                self.load_errors.insert(kind, s!("Unable to load."));
                self.selections.remove(&kind);
                self.stage_options.remove(&kind);
                self.results.remove(&kind);
            }
        }
    }

    /// Fresh selection + first-stage options for a loaded domain.
    pub fn reset_cascade(&mut self, kind: DomainKind) {
        let Some(page) = router::directory_page(kind) else { return };
        let Some(records) = self.datasets.get(&kind) else { return };

        let sel = Selection::for_chain(page.chain);
        let first = page.chain.options(records, &sel, 0);
        self.selections.insert(kind, sel);
        self.stage_options.insert(kind, vec![first]);
        self.results.remove(&kind);
    }

    /// The single change handler for the whole cascade: bind (or clear)
    /// one slot, invalidate everything downstream, then derive the next
    /// stage's options — and the results once fully bound. Synchronous;
    /// runs to completion before the next change event.
    pub fn on_facet_change(&mut self, kind: DomainKind, stage: usize, value: Option<String>) {
        let Some(page) = router::directory_page(kind) else { return };
        let Some(records) = self.datasets.get(&kind).cloned() else { return };
        let Some(sel) = self.selections.get_mut(&kind) else { return };

        sel.set(stage, value);
        logd!("Facet: {:?} stage {} → {:?}", kind, stage, sel.get(stage));

        // Downstream option lists and the results area are stale now.
        let opts = self.stage_options.entry(kind).or_default();
        opts.truncate(stage + 1);
        self.results.remove(&kind);
        self.result_errors.remove(&kind);

        let sel = &self.selections[&kind];
        if sel.get(stage).is_none() {
            return;
        }

        if stage + 1 < page.chain.len() {
            let next = page.chain.options(&records, sel, stage + 1);
            if next.is_empty() {
                logd!("Facet: {:?} stage {} has no options", kind, stage + 1);
            }
            self.stage_options.get_mut(&kind).unwrap().push(next);
        }

        if sel.is_complete() {
            match page.chain.results(&records, sel) {
                Ok(listings) => {
                    let view = ResultsView::build(page.chain, sel, &listings);
                    logf!("Results: {:?} → {} employer(s)", kind, view.count);
                    self.results.insert(kind, view);
                }
                Err(e) => {
                    // Degrade to the inline message; never crash the page.
                    loge!("Results: {:?} failed: {}", kind, e);
                    self.result_errors.insert(kind, s!("Failed to load results."));
                }
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Refresh the in-memory cart mirror after a mutation.
    pub fn reload_cart(&mut self) {
        self.cart_items = self.cart.items();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);

            ui.separator();
            let status = self.status.lock().unwrap().clone();
            ui.label(format!("Status: {status}"));
        });
    }
}
