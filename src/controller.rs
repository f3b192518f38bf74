//! Round controller: applies UI actions, server messages and timer ticks to the
//! round state, redraws the affected screen regions and talks to the server.

use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::PageConfig;
use crate::live::{LiveChannel, RoundFinisher};
use crate::model::GameState;
use crate::protocol::{Inbound, Outbound, decode_batch};
use crate::render::{Renderer, Screen, mismatch_message};
use crate::state::RoundTimer;

/// Player-originated actions, emitted by the components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    AddComponent(String),
    RemoveComponent(usize),
    Reset,
    Submit,
    /// Show the expected components of a recipe; `None` hides the hint.
    PreviewRecipe(Option<String>),
    DismissError,
    /// Debug pages only: fill the assembly with the current order's recipe.
    Autocomplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstOrder,
    Assembling,
    Finished,
}

pub struct Controller<C, F> {
    state: GameState,
    screen: Screen,
    renderer: Renderer,
    timer: RoundTimer,
    config: Rc<PageConfig>,
    channel: C,
    finisher: F,
    started: bool,
}

impl<C: LiveChannel, F: RoundFinisher> Controller<C, F> {
    pub fn new(config: Rc<PageConfig>, channel: C, finisher: F) -> Self {
        let state = GameState::new(config.duration);
        let timer = RoundTimer::new(config.duration);
        let renderer = Renderer::new(config.clone());
        let mut screen = Screen::default();
        renderer.render_all(&mut screen, &state, timer.remaining());
        Self {
            state,
            screen,
            renderer,
            timer,
            config,
            channel,
            finisher,
            started: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn phase(&self) -> Phase {
        if self.timer.is_finished() {
            Phase::Finished
        } else if self.state.order.is_none() {
            Phase::AwaitingFirstOrder
        } else {
            Phase::Assembling
        }
    }

    /// Draws the initial screen and asks the server for the first order.
    /// The caller starts the 1 second interval that drives `tick`.
    pub fn start(&mut self) {
        if self.started {
            warn!("round already started");
            return;
        }
        self.started = true;
        info!(duration = self.state.duration(), "round started");
        self.renderer
            .render_all(&mut self.screen, &self.state, self.timer.remaining());
        self.send(Outbound::Start);
    }

    /// One timer interval elapsed. Hands over to the page exactly once when time runs out.
    pub fn tick(&mut self) -> Phase {
        if self.timer.tick() {
            self.renderer
                .render_timer(&mut self.screen, self.timer.remaining());
            info!(completed = self.state.count, "round finished");
            self.finisher.finish();
        } else if !self.timer.is_finished() {
            self.renderer
                .render_timer(&mut self.screen, self.timer.remaining());
        }
        self.phase()
    }

    /// Applies one live delivery, a single message or an ordered batch.
    pub fn handle_inbound(&mut self, delivery: Value) {
        for decoded in decode_batch(delivery) {
            match decoded {
                Ok(msg) => self.apply(msg),
                Err(e) => error!("ignoring inbound message: {e}"),
            }
        }
    }

    fn apply(&mut self, msg: Inbound) {
        debug!(kind = msg.kind(), "inbound");
        match msg {
            Inbound::Status { performed } => {
                self.state.count = performed;
                self.renderer.render_counter(&mut self.screen, performed);
            }
            Inbound::Order { order } => {
                self.state.set_order(order);
                self.renderer
                    .render_order(&mut self.screen, self.state.order.as_deref());
                self.renderer
                    .render_assembly(&mut self.screen, self.state.assembled());
                self.renderer.hide_recipe_hint(&mut self.screen);
            }
            Inbound::Error { mismatches } => {
                self.renderer
                    .show_error(&mut self.screen, mismatch_message(mismatches));
            }
        }
    }

    pub fn dispatch(&mut self, action: UiAction) {
        match action {
            UiAction::AddComponent(name) => {
                if name.is_empty() {
                    debug!("add with empty selection ignored");
                    return;
                }
                self.state.add_component(name);
                self.render_assembly();
            }
            UiAction::RemoveComponent(idx) => {
                if self.state.remove_component(idx).is_none() {
                    warn!(idx, len = self.state.assembled().len(), "remove index out of range");
                }
                self.render_assembly();
            }
            UiAction::Reset => {
                self.state.reset();
                self.render_assembly();
            }
            UiAction::Submit => {
                let components = self.state.assembled().to_vec();
                self.send(Outbound::Sandwich { components });
            }
            UiAction::PreviewRecipe(Some(name)) if !name.is_empty() => {
                self.renderer.show_recipe_hint(&mut self.screen, &name);
            }
            UiAction::PreviewRecipe(_) => self.renderer.hide_recipe_hint(&mut self.screen),
            UiAction::DismissError => self.renderer.hide_error(&mut self.screen),
            UiAction::Autocomplete => self.autocomplete(),
        }
    }

    fn autocomplete(&mut self) {
        if !self.config.debug {
            debug!("autocomplete ignored outside debug pages");
            return;
        }
        let Some(order) = self.state.order.as_deref() else {
            return;
        };
        let Some(recipe) = self.config.recipe(order) else {
            warn!("no recipe named {order:?} in menu");
            return;
        };
        let recipe = recipe.to_vec();
        self.state.fill_from_recipe(&recipe);
        self.render_assembly();
    }

    fn render_assembly(&mut self) {
        self.renderer
            .render_assembly(&mut self.screen, self.state.assembled());
    }

    fn send(&self, msg: Outbound) {
        match self.channel.send(&msg) {
            Ok(()) => debug!(kind = msg.kind(), "outbound"),
            Err(e) => error!(kind = msg.kind(), "send failed: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiveError;
    use crate::live::Subscription;
    use crate::render::ORDER_PLACEHOLDER;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Default)]
    struct RecordingChannel {
        sent: Rc<RefCell<Vec<Outbound>>>,
    }

    impl LiveChannel for RecordingChannel {
        fn send(&self, message: &Outbound) -> Result<(), LiveError> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }

        fn subscribe(&self, _handler: Box<dyn FnMut(Value)>) -> Result<Subscription, LiveError> {
            Ok(Subscription::new(|| {}))
        }
    }

    struct BrokenChannel;

    impl LiveChannel for BrokenChannel {
        fn send(&self, _message: &Outbound) -> Result<(), LiveError> {
            Err(LiveError::Unavailable("liveSend"))
        }

        fn subscribe(&self, _handler: Box<dyn FnMut(Value)>) -> Result<Subscription, LiveError> {
            Err(LiveError::Unavailable("liveRecv"))
        }
    }

    #[derive(Clone, Default)]
    struct CountingFinisher {
        calls: Rc<Cell<u32>>,
    }

    impl RoundFinisher for CountingFinisher {
        fn finish(&mut self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn config(duration: u32, debug: bool) -> Rc<PageConfig> {
        let raw = json!({
            "duration": duration,
            "debug": debug,
            "menu": {
                "BLT": ["bread", "bacon", "lettuce", "tomato"],
                "Club": ["bread", "turkey", "bacon"]
            },
            "images": {"bacon": "/img/bacon.jpg"}
        });
        Rc::new(PageConfig::from_json(&raw.to_string()).unwrap())
    }

    fn controller(
        duration: u32,
    ) -> (
        Controller<RecordingChannel, CountingFinisher>,
        Rc<RefCell<Vec<Outbound>>>,
        Rc<Cell<u32>>,
    ) {
        let channel = RecordingChannel::default();
        let finisher = CountingFinisher::default();
        let sent = channel.sent.clone();
        let calls = finisher.calls.clone();
        let mut ctrl = Controller::new(config(duration, false), channel, finisher);
        ctrl.start();
        (ctrl, sent, calls)
    }

    fn names(ctrl: &Controller<RecordingChannel, CountingFinisher>) -> Vec<&str> {
        ctrl.state().assembled().iter().map(String::as_str).collect()
    }

    #[test]
    fn start_sends_start_and_draws_initial_screen() {
        let (ctrl, sent, _) = controller(90);
        assert_eq!(*sent.borrow(), vec![Outbound::Start]);
        assert_eq!(ctrl.phase(), Phase::AwaitingFirstOrder);
        assert_eq!(ctrl.screen().order, ORDER_PLACEHOLDER);
        assert_eq!(ctrl.screen().timer, "1:30");
        assert_eq!(ctrl.screen().counter, "0");
        assert!(!ctrl.screen().submit_enabled);
    }

    #[test]
    fn second_start_is_ignored() {
        let (mut ctrl, sent, _) = controller(90);
        ctrl.start();
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn order_add_remove_submit_error_scenario() {
        let (mut ctrl, sent, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "order", "order": "BLT"}));
        assert_eq!(ctrl.phase(), Phase::Assembling);
        assert!(ctrl.state().assembled().is_empty());
        assert_eq!(ctrl.screen().order, "BLT");

        ctrl.dispatch(UiAction::AddComponent("bacon".into()));
        ctrl.dispatch(UiAction::AddComponent("lettuce".into()));
        assert_eq!(names(&ctrl), ["lettuce", "bacon"]);

        ctrl.dispatch(UiAction::RemoveComponent(0));
        assert_eq!(names(&ctrl), ["bacon"]);

        ctrl.dispatch(UiAction::Submit);
        assert_eq!(
            sent.borrow().last(),
            Some(&Outbound::Sandwich {
                components: vec!["bacon".into()]
            })
        );

        ctrl.handle_inbound(json!({"type": "error", "mismatches": 2}));
        let err = ctrl.screen().error.clone().unwrap();
        assert!(err.contains('2'));
        assert_eq!(names(&ctrl), ["bacon"]);
    }

    #[test]
    fn batch_applies_status_then_order() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "order", "order": "BLT"}));
        ctrl.dispatch(UiAction::AddComponent("bread".into()));
        ctrl.dispatch(UiAction::PreviewRecipe(Some("BLT".into())));
        assert!(ctrl.screen().recipe_hint.is_some());

        ctrl.handle_inbound(json!([
            {"type": "status", "performed": 3},
            {"type": "order", "order": "Club"}
        ]));
        assert_eq!(ctrl.state().count, 3);
        assert_eq!(ctrl.screen().counter, "3");
        assert_eq!(ctrl.state().order.as_deref(), Some("Club"));
        assert!(ctrl.state().assembled().is_empty());
        assert!(ctrl.screen().assembly.is_empty());
        assert!(ctrl.screen().recipe_hint.is_none());
    }

    #[test]
    fn repeated_status_is_idempotent() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "status", "performed": 5}));
        let before = ctrl.screen().clone();
        ctrl.handle_inbound(json!({"type": "status", "performed": 5}));
        assert_eq!(ctrl.state().count, 5);
        assert_eq!(*ctrl.screen(), before);
    }

    #[test]
    fn unrecognized_message_leaves_state_untouched() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "order", "order": "BLT"}));
        ctrl.dispatch(UiAction::AddComponent("ham".into()));
        let state = ctrl.state().clone();
        let screen = ctrl.screen().clone();
        ctrl.handle_inbound(json!({"type": "bonus", "amount": 1}));
        ctrl.handle_inbound(json!("hello"));
        assert_eq!(*ctrl.state(), state);
        assert_eq!(*ctrl.screen(), screen);
    }

    #[test]
    fn bad_entry_in_batch_does_not_block_the_rest() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!([
            {"type": "mystery"},
            {"type": "status", "performed": 1}
        ]));
        assert_eq!(ctrl.state().count, 1);
    }

    #[test]
    fn empty_selection_and_bad_index_are_absorbed() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.dispatch(UiAction::AddComponent(String::new()));
        assert!(ctrl.state().assembled().is_empty());
        ctrl.dispatch(UiAction::AddComponent("cheese".into()));
        ctrl.dispatch(UiAction::RemoveComponent(7));
        assert_eq!(names(&ctrl), ["cheese"]);
        assert_eq!(ctrl.screen().assembly.len(), 1);
    }

    #[test]
    fn submit_twice_sends_same_snapshot_and_keeps_assembly() {
        let (mut ctrl, sent, _) = controller(60);
        ctrl.dispatch(UiAction::AddComponent("bread".into()));
        ctrl.dispatch(UiAction::AddComponent("bread".into()));
        ctrl.dispatch(UiAction::Submit);
        ctrl.dispatch(UiAction::Submit);
        let sent = sent.borrow();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1], sent[2]);
        assert_eq!(
            sent[1],
            Outbound::Sandwich {
                components: vec!["bread".into(), "bread".into()]
            }
        );
        assert_eq!(names(&ctrl), ["bread", "bread"]);
    }

    #[test]
    fn reset_clears_assembly_and_disables_submit() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.dispatch(UiAction::AddComponent("bread".into()));
        assert!(ctrl.screen().submit_enabled);
        ctrl.dispatch(UiAction::Reset);
        assert!(ctrl.state().assembled().is_empty());
        assert!(!ctrl.screen().submit_enabled);
    }

    #[test]
    fn timer_finishes_exactly_once() {
        let (mut ctrl, _, calls) = controller(5);
        let phases: Vec<Phase> = (0..5).map(|_| ctrl.tick()).collect();
        assert_eq!(phases[3], Phase::AwaitingFirstOrder);
        assert_eq!(phases[4], Phase::Finished);
        assert_eq!(calls.get(), 1);
        assert_eq!(ctrl.screen().timer, "0:00");
        for _ in 0..10 {
            ctrl.tick();
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn zero_duration_round_finishes_on_first_tick() {
        let (mut ctrl, _, calls) = controller(0);
        assert_eq!(ctrl.screen().timer, "0:00");
        assert_eq!(ctrl.tick(), Phase::Finished);
        assert_eq!(calls.get(), 1);
        ctrl.tick();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn tick_redraws_remaining_time() {
        let (mut ctrl, _, _) = controller(61);
        ctrl.tick();
        assert_eq!(ctrl.screen().timer, "1:00");
        ctrl.tick();
        assert_eq!(ctrl.screen().timer, "0:59");
    }

    #[test]
    fn error_can_be_dismissed() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "error", "mismatches": 1}));
        assert!(ctrl.screen().error.is_some());
        ctrl.dispatch(UiAction::DismissError);
        assert!(ctrl.screen().error.is_none());
    }

    #[test]
    fn preview_with_empty_name_hides_hint() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.dispatch(UiAction::PreviewRecipe(Some("Club".into())));
        assert_eq!(ctrl.screen().recipe_hint.as_ref().unwrap().items.len(), 3);
        ctrl.dispatch(UiAction::PreviewRecipe(Some(String::new())));
        assert!(ctrl.screen().recipe_hint.is_none());
    }

    #[test]
    fn autocomplete_requires_debug_page() {
        let (mut ctrl, _, _) = controller(60);
        ctrl.handle_inbound(json!({"type": "order", "order": "Club"}));
        ctrl.dispatch(UiAction::Autocomplete);
        assert!(ctrl.state().assembled().is_empty());

        let mut dbg = Controller::new(
            config(60, true),
            RecordingChannel::default(),
            CountingFinisher::default(),
        );
        dbg.dispatch(UiAction::Autocomplete);
        assert!(dbg.state().assembled().is_empty());
        dbg.handle_inbound(json!({"type": "order", "order": "Club"}));
        dbg.dispatch(UiAction::Autocomplete);
        assert_eq!(dbg.state().assembled(), ["bread", "turkey", "bacon"]);
        assert_eq!(dbg.screen().assembly.len(), 3);
    }

    #[test]
    fn send_failures_do_not_disturb_the_round() {
        let mut ctrl = Controller::new(config(60, false), BrokenChannel, CountingFinisher::default());
        ctrl.start();
        ctrl.dispatch(UiAction::AddComponent("ham".into()));
        ctrl.dispatch(UiAction::Submit);
        assert_eq!(ctrl.state().assembled(), ["ham"]);
        assert_eq!(ctrl.phase(), Phase::AwaitingFirstOrder);
    }
}
