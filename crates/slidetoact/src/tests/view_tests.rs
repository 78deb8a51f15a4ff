use super::*;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME: u64 = 16_666_667;

#[derive(Default)]
struct HostLog {
    invalidations: usize,
    outline_invalidations: usize,
    intercept: Vec<bool>,
}

struct SharedHost(Rc<RefCell<HostLog>>);

impl HostShell for SharedHost {
    fn invalidate(&mut self) {
        self.0.borrow_mut().invalidations += 1;
    }

    fn invalidate_outline(&mut self) {
        self.0.borrow_mut().outline_invalidations += 1;
    }

    fn request_disallow_intercept(&mut self, disallow: bool) {
        self.0.borrow_mut().intercept.push(disallow);
    }
}

#[derive(Default)]
struct IconLog {
    animated: bool,
    starts: usize,
    stops: usize,
    tints: Vec<(Icon, Color)>,
}

struct SharedIcons(Rc<RefCell<IconLog>>);

impl IconProvider for SharedIcons {
    fn supports_animation(&self) -> bool {
        self.0.borrow().animated
    }

    fn start_animation(&mut self) {
        self.0.borrow_mut().starts += 1;
    }

    fn stop_animation(&mut self) {
        self.0.borrow_mut().stops += 1;
    }

    fn set_tint(&mut self, icon: Icon, color: Color) {
        self.0.borrow_mut().tints.push((icon, color));
    }
}

struct Fixture {
    view: SlideToActView,
    host: Rc<RefCell<HostLog>>,
    icons: Rc<RefCell<IconLog>>,
    now: u64,
}

impl Fixture {
    fn new(animated_tick: bool) -> Self {
        let host = Rc::new(RefCell::new(HostLog::default()));
        let icons = Rc::new(RefCell::new(IconLog {
            animated: animated_tick,
            ..IconLog::default()
        }));
        let mut view = SlideToActView::new(
            &SlideToActConfig::new("Slide"),
            1.0,
            1.0,
            Box::new(SharedHost(host.clone())),
            Box::new(SharedIcons(icons.clone())),
        )
        .unwrap();
        view.on_size_changed(272, 72).unwrap();
        Self {
            view,
            host,
            icons,
            now: 0,
        }
    }

    fn pump(&mut self) {
        for _ in 0..200 {
            if self.view.pipeline_kind().is_none() {
                return;
            }
            self.view.on_frame(self.now);
            self.now += FRAME;
        }
        panic!("pipeline never settled");
    }

    fn drag(&mut self, to: i32) {
        let x = 36.0 + self.view.position().position() as f32;
        assert!(self.view.handle_pointer_event(&PointerEvent::down(x, 36.0)));
        self.view
            .handle_pointer_event(&PointerEvent::moved(36.0 + to as f32, 36.0));
        self.view
            .handle_pointer_event(&PointerEvent::up(36.0 + to as f32, 36.0));
    }
}

#[test]
fn tall_layout_is_rejected_and_geometry_kept() {
    let mut fixture = Fixture::new(false);
    let result = fixture.view.on_size_changed(40, 72);
    assert_eq!(
        result,
        Err(SlideToActError::InvalidTrack {
            width: 40,
            height: 72
        })
    );
    assert_eq!(fixture.view.position().width(), 272);
    assert_eq!(fixture.view.position().height(), 72);
}

#[test]
fn drag_toggles_parent_interception() {
    let mut fixture = Fixture::new(false);
    fixture.drag(50);
    assert_eq!(fixture.host.borrow().intercept, vec![true, false]);
    assert!(fixture.host.borrow().invalidations > 0);
}

#[test]
fn pointer_up_outside_a_drag_still_releases_interception() {
    let mut fixture = Fixture::new(false);
    assert!(fixture
        .view
        .handle_pointer_event(&PointerEvent::up(200.0, 36.0)));
    assert_eq!(fixture.host.borrow().intercept, vec![false]);
}

#[test]
fn input_is_not_consumed_after_a_commit() {
    let mut fixture = Fixture::new(false);
    fixture.drag(190);
    assert!(!fixture.view.is_enabled());
    assert!(!fixture
        .view
        .handle_pointer_event(&PointerEvent::down(230.0, 36.0)));
    fixture.pump();
    assert!(fixture.view.is_completed());
    assert!(!fixture.view.is_enabled());
}

#[test]
fn fallback_tick_fades_in_and_reset_hides_it() {
    let mut fixture = Fixture::new(false);
    fixture.view.complete_slider();
    fixture.pump();
    let surface = fixture.view.surface();
    assert!(surface.draw_tick);
    assert_eq!(surface.tick_alpha, 255);
    assert_eq!(surface.tick_margin, 16);
    assert_eq!(fixture.icons.borrow().starts, 0);

    fixture.view.reset_slider();
    fixture.pump();
    assert!(!fixture.view.surface().draw_tick);
    assert_eq!(fixture.icons.borrow().stops, 0);
}

#[test]
fn animated_tick_starts_once_and_stops_after_reset() {
    let mut fixture = Fixture::new(true);
    fixture.view.complete_slider();
    fixture.pump();
    assert_eq!(fixture.icons.borrow().starts, 1);
    assert_eq!(fixture.view.surface().tick_alpha, 255);

    fixture.view.reset_slider();
    fixture.pump();
    assert_eq!(fixture.icons.borrow().stops, 1);
    assert_eq!(fixture.icons.borrow().starts, 1);
}

#[test]
fn complete_updates_the_outline_while_the_track_shrinks() {
    let mut fixture = Fixture::new(false);
    let before = fixture.host.borrow().outline_invalidations;
    fixture.view.complete_slider();
    fixture.pump();
    assert!(fixture.host.borrow().outline_invalidations > before);
    assert_eq!(fixture.view.surface().actual_area_width, 100);
    assert_eq!(fixture.view.surface().right_icon_alpha, 0);
}

#[test]
fn colors_retint_the_icons() {
    let mut fixture = Fixture::new(false);
    fixture.icons.borrow_mut().tints.clear();
    fixture.view.set_outer_color(Color::BLACK);
    fixture.view.set_inner_color(Color::TRANSPARENT);
    assert_eq!(
        fixture.icons.borrow().tints,
        vec![
            (Icon::Arrow, Color::BLACK),
            (Icon::RightIcon, Color::TRANSPARENT),
            (Icon::Tick, Color::TRANSPARENT),
        ]
    );
    assert_eq!(fixture.view.frame().outer_color, Color::BLACK);
}

#[test]
fn construction_tints_every_icon() {
    let fixture = Fixture::new(false);
    let icons = fixture.icons.borrow();
    let tints = &icons.tints;
    assert_eq!(tints.len(), 3);
    assert!(tints.contains(&(Icon::Arrow, Color::PINK_ACCENT)));
}

#[test]
fn negative_text_size_is_rejected() {
    let mut fixture = Fixture::new(false);
    assert!(fixture.view.set_text_size(Sp(-2.0)).is_err());
    assert!(fixture.view.set_text_size(Sp(20.0)).is_ok());
    assert_eq!(fixture.view.frame().text.size, 20.0);
}

#[test]
fn complete_interrupts_a_snap() {
    let mut fixture = Fixture::new(false);
    fixture.drag(100);
    assert_eq!(fixture.view.pipeline_kind(), Some(PipelineKind::Snap));
    fixture.view.on_frame(0);
    fixture.view.on_frame(FRAME);
    fixture.now = 2 * FRAME;

    fixture.view.complete_slider();
    assert_eq!(fixture.view.pipeline_kind(), Some(PipelineKind::Complete));
    fixture.pump();
    assert!(fixture.view.is_completed());
    assert_eq!(fixture.view.position().position(), 200);
}

#[test]
fn reset_from_the_complete_listener_runs_next() {
    let mut fixture = Fixture::new(false);
    fixture
        .view
        .set_on_slide_complete(|view: &mut SlideToActView| view.reset_slider());
    fixture.view.complete_slider();
    for _ in 0..40 {
        if fixture.view.pipeline_kind() != Some(PipelineKind::Complete) {
            break;
        }
        fixture.view.on_frame(fixture.now);
        fixture.now += FRAME;
    }
    assert_eq!(fixture.view.pipeline_kind(), Some(PipelineKind::Reset));
    assert!(!fixture.view.is_completed());
    fixture.pump();
    assert_eq!(fixture.view.position().position(), 0);
    assert!(fixture.view.is_enabled());
}

#[test]
fn listener_replaced_from_inside_its_call_is_kept() {
    let mut fixture = Fixture::new(false);
    let calls = Rc::new(RefCell::new(Vec::new()));
    let first = calls.clone();
    fixture.view.set_on_slide_complete(move |view: &mut SlideToActView| {
        first.borrow_mut().push("first");
        let second = first.clone();
        view.set_on_slide_complete(move |_: &mut SlideToActView| {
            second.borrow_mut().push("second");
        });
    });

    for _ in 0..2 {
        fixture.view.complete_slider();
        fixture.pump();
        fixture.view.reset_slider();
        fixture.pump();
    }
    assert_eq!(*calls.borrow(), vec!["first", "second"]);
}

#[test]
fn detach_cancels_without_end_notifications() {
    let mut fixture = Fixture::new(false);
    let ended = Rc::new(RefCell::new(false));
    let flag = ended.clone();
    fixture
        .view
        .set_on_slide_complete(move |_: &mut SlideToActView| *flag.borrow_mut() = true);
    fixture.view.complete_slider();
    fixture.view.on_frame(0);
    fixture.view.detach();
    assert_eq!(fixture.view.pipeline_kind(), None);
    fixture.view.on_frame(FRAME * 100);
    assert!(!*ended.borrow());
    assert!(!fixture.view.is_completed());
    assert!(!fixture.view.is_animating());
}

struct Labels {
    seen: Rc<RefCell<Vec<&'static str>>>,
}

impl SlideAnimationListener for Labels {
    fn on_complete_animation_started(&mut self, _view: &mut SlideToActView, _threshold: f32) {
        self.seen.borrow_mut().push("complete-started");
    }

    fn on_complete_animation_ended(&mut self, view: &mut SlideToActView) {
        self.seen.borrow_mut().push("complete-ended");
        view.reset_slider();
    }

    fn on_reset_animation_started(&mut self, _view: &mut SlideToActView) {
        self.seen.borrow_mut().push("reset-started");
    }

    fn on_reset_animation_ended(&mut self, _view: &mut SlideToActView) {
        self.seen.borrow_mut().push("reset-ended");
    }
}

#[test]
fn animation_events_raised_inside_the_listener_are_delivered() {
    let mut fixture = Fixture::new(false);
    let seen = Rc::new(RefCell::new(Vec::new()));
    fixture
        .view
        .set_animation_listener(Labels { seen: seen.clone() });
    fixture.view.complete_slider();
    fixture.pump();

    assert_eq!(
        *seen.borrow(),
        vec!["complete-started", "complete-ended", "reset-started", "reset-ended"]
    );
    assert!(!fixture.view.is_completed());
    assert_eq!(fixture.view.position().position(), 0);
}

#[test]
fn busy_slider_snaps_back_instead_of_committing() {
    let mut fixture = Fixture::new(false);
    fixture.view.set_is_animating(true);
    fixture.drag(190);
    assert_eq!(fixture.view.pipeline_kind(), Some(PipelineKind::Snap));
    assert!(fixture.view.is_enabled());
    fixture.pump();
    assert_eq!(fixture.view.position().position(), 0);
    assert!(!fixture.view.is_completed());

    fixture.view.set_is_animating(false);
    fixture.drag(190);
    assert_eq!(fixture.view.pipeline_kind(), Some(PipelineKind::Complete));
    fixture.pump();
    assert!(fixture.view.is_completed());
}

#[test]
fn typeface_reaches_the_text_frame() {
    let mut fixture = Fixture::new(false);
    let before = fixture.host.borrow().invalidations;
    fixture.view.set_typeface(Typeface::BOLD);
    assert_eq!(fixture.view.frame().text.typeface, Typeface::BOLD);
    assert!(fixture.host.borrow().invalidations > before);
}
