use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use report_lens_engine::{
    Block, CitationId, Ledger, ResearchResult,
    citations::{IntakeProbe, ManualIntake, Probe, ProbeCompletion, ProbeOutcome, spawn_check},
    parse,
};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

/// Which intake field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Url,
    Title,
}

pub struct IntakeForm {
    pub intake: ManualIntake,
    pub field: IntakeField,
    pub error: Option<String>,
}

impl IntakeForm {
    fn new() -> Self {
        Self {
            intake: ManualIntake::new(),
            field: IntakeField::Url,
            error: None,
        }
    }
}

/// Probes a url typed into the intake form and reports back on `tx`.
fn spawn_intake_check(
    probe: Arc<dyn Probe>,
    request: IntakeProbe,
    tx: UnboundedSender<(IntakeProbe, ProbeOutcome)>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = probe.probe(&request.url).await;
        if tx.send((request, outcome)).is_err() {
            log::debug!("intake check finished after the app stopped listening");
        }
    })
}

pub struct App {
    pub name: String,
    pub report: ResearchResult,
    pub blocks: Vec<Block>,
    pub ledger: Ledger,
    pub list_state: ListState,
    pub scroll: u16,
    /// Show the generator's scratchpad instead of the report.
    pub show_scratchpad: bool,
    pub intake: Option<IntakeForm>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    probe: Arc<dyn Probe>,
    checks_tx: UnboundedSender<ProbeCompletion>,
    checks_rx: UnboundedReceiver<ProbeCompletion>,
    intake_tx: UnboundedSender<(IntakeProbe, ProbeOutcome)>,
    intake_rx: UnboundedReceiver<(IntakeProbe, ProbeOutcome)>,
}

impl App {
    pub fn new(name: String, report: ResearchResult, probe: Arc<dyn Probe>) -> Self {
        let blocks = parse(&report.report);
        let ledger = Ledger::from_report(&report.report);
        let (checks_tx, checks_rx) = mpsc::unbounded_channel();
        let (intake_tx, intake_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            name,
            report,
            blocks,
            ledger,
            list_state: ListState::default(),
            scroll: 0,
            show_scratchpad: false,
            intake: None,
            status_message: None,
            should_quit: false,
            probe,
            checks_tx,
            checks_rx,
            intake_tx,
            intake_rx,
        };

        // Select first citation if available
        if !app.ledger.is_empty() {
            app.list_state.select(Some(0));
        }

        app
    }

    fn next_citation(&mut self) {
        let len = self.ledger.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous_citation(&mut self) {
        let len = self.ledger.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_id(&self) -> Option<CitationId> {
        let position = self.list_state.selected()?;
        self.ledger.nth(position).map(|c| c.id)
    }

    pub fn check_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.ledger.begin_check(id) {
            Ok(ticket) => {
                spawn_check(Arc::clone(&self.probe), ticket, self.checks_tx.clone());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    pub fn check_all(&mut self) {
        let tickets = self.ledger.begin_check_all();
        self.status_message = Some(format!("Checking {} citations", tickets.len()));
        for ticket in tickets {
            spawn_check(Arc::clone(&self.probe), ticket, self.checks_tx.clone());
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && let Err(e) = self.ledger.toggle_verified(id)
        {
            self.status_message = Some(e.to_string());
        }
    }

    /// Applies every probe result that has arrived since the last call.
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.checks_rx.try_recv() {
            match self.ledger.apply(&completion) {
                Ok(status) => log::debug!("{} is now {status:?}", completion.ticket.id),
                Err(e) => log::debug!("ignoring probe result: {e}"),
            }
        }
        while let Ok((request, outcome)) = self.intake_rx.try_recv() {
            if let Some(form) = &mut self.intake {
                form.intake.complete_probe(&request, outcome);
            }
        }
    }

    fn commit_intake_url(&mut self) {
        let Some(form) = &mut self.intake else {
            return;
        };
        let Some(request) = form.intake.commit_url() else {
            return;
        };
        spawn_intake_check(Arc::clone(&self.probe), request, self.intake_tx.clone());
    }

    fn submit_intake(&mut self) {
        let Some(form) = &mut self.intake else {
            return;
        };
        match self.ledger.submit_manual(&mut form.intake) {
            Ok(citation) => {
                self.status_message = Some(format!("Added {}", citation.id));
                self.intake = None;
                self.list_state.select(Some(self.ledger.len() - 1));
            }
            Err(e) => form.error = Some(e.to_string()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.intake.is_some() {
            self.handle_intake_key(key);
        } else {
            self.handle_normal_key(key);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next_citation(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_citation(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Char('c') => self.check_selected(),
            KeyCode::Char('C') => self.check_all(),
            KeyCode::Char('v') => self.toggle_selected(),
            KeyCode::Char('a') => self.intake = Some(IntakeForm::new()),
            KeyCode::Char('s') => {
                self.show_scratchpad = !self.show_scratchpad;
                self.scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_intake_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.intake = None,
            KeyCode::Enter => self.submit_intake(),
            KeyCode::Tab | KeyCode::BackTab => {
                let leaving_url = self
                    .intake
                    .as_ref()
                    .is_some_and(|f| f.field == IntakeField::Url);
                if leaving_url {
                    self.commit_intake_url();
                }
                if let Some(form) = &mut self.intake {
                    form.field = match form.field {
                        IntakeField::Url => IntakeField::Title,
                        IntakeField::Title => IntakeField::Url,
                    };
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = &mut self.intake {
                    match form.field {
                        IntakeField::Url => {
                            form.intake.url_mut().pop();
                        }
                        IntakeField::Title => {
                            form.intake.title_mut().pop();
                        }
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = &mut self.intake {
                    form.error = None;
                    match form.field {
                        IntakeField::Url => form.intake.url_mut().push(c),
                        IntakeField::Title => form.intake.title_mut().push(c),
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use report_lens_engine::Status;
    use std::time::Duration;

    struct AlwaysReachable;

    #[async_trait]
    impl Probe for AlwaysReachable {
        async fn probe(&self, _url: &str) -> ProbeOutcome {
            ProbeOutcome::Reachable
        }
    }

    fn app() -> App {
        let report = ResearchResult::from_report(
            "## R\n[One](https://one.example) and [Two](https://two.example)",
        );
        App::new("r.md".to_string(), report, Arc::new(AlwaysReachable))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Polls the app's channels until `done` holds or the wait runs out.
    async fn settle(app: &mut App, done: impl Fn(&App) -> bool) {
        for _ in 0..100 {
            app.drain_completions();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("app did not settle");
    }

    #[tokio::test]
    async fn selection_wraps() {
        let mut app = app();
        assert_eq!(app.list_state.selected(), Some(0));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.list_state.selected(), Some(1));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn check_selected_goes_live_after_drain() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.ledger.extracted()[0].status, Status::Checking);

        settle(&mut app, |a| a.ledger.extracted()[0].status == Status::Live).await;
        assert!(app.ledger.extracted()[0].verified);
        assert_eq!(app.ledger.extracted()[1].status, Status::Unknown);
    }

    #[tokio::test]
    async fn toggle_marks_selected_verified() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('v'));
        assert!(app.ledger.extracted()[1].verified);
    }

    #[tokio::test]
    async fn intake_form_adds_manual_citation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "https://example.com/My-Great-Report.html");
        press(&mut app, KeyCode::Tab);

        settle(&mut app, |a| {
            a.intake
                .as_ref()
                .is_some_and(|f| f.intake.title() == "My great report")
        })
        .await;

        press(&mut app, KeyCode::Enter);
        assert!(app.intake.is_none());
        let added = &app.ledger.manual()[0];
        assert_eq!(added.title, "My great report");
        assert_eq!(added.status, Status::Live);
        assert_eq!(app.list_state.selected(), Some(2));
        assert_eq!(app.status_message.as_deref(), Some("Added man-0"));
    }

    #[tokio::test]
    async fn intake_rejects_empty_title() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "ftp://x");
        press(&mut app, KeyCode::Enter);
        let form = app.intake.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Title is required"));
        assert!(app.ledger.manual().is_empty());
    }

    #[tokio::test]
    async fn intake_check_survives_closed_channel() {
        let mut intake = ManualIntake::new();
        intake.set_url("https://example.com/notes");
        let request = intake.commit_url().unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        spawn_intake_check(Arc::new(AlwaysReachable), request, tx)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn escape_closes_form_and_q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.intake.is_none());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
