//! End-to-end carousel scenarios.
//!
//! Run with: cargo test --test carousel_scenarios

use std::thread;
use std::time::Duration;

use spark_carousel::{
    Carousel, CarouselConfig, CarouselEvent, KeyboardEvent, PauseReasons, PointerEvent, Swipe,
};

fn manual(len: usize) -> Carousel<String> {
    let slides = (0..len).map(|i| format!("testimonial {i}")).collect();
    Carousel::new(slides, CarouselConfig::default().with_autoplay(false)).unwrap()
}

#[test]
fn test_four_slides_walk_to_the_end() {
    let mut carousel = manual(4);

    assert!(!carousel.previous());
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.render_state().previous_disabled);

    for _ in 0..3 {
        assert!(carousel.next());
    }
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.current_slide(), "testimonial 3");

    let state = carousel.render_state();
    assert!(state.next_disabled);
    assert!(!state.previous_disabled);
    assert_eq!(state.css_transform(), "translateX(-300%)");

    assert!(!carousel.next());
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_autoplay_tick_at_last_slide_wraps_to_first() {
    let slides = vec!["a", "b", "c", "d"];
    let mut carousel = Carousel::new(slides, CarouselConfig::default()).unwrap();
    carousel.go_to(3).unwrap();

    let generation = carousel.timer_generation().unwrap();
    carousel.handle(CarouselEvent::AutoplayTick { generation });

    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_dot_active(0));
    assert!(!carousel.is_dot_active(3));
}

#[test]
fn test_swipe_left_sixty_pixels_advances_once() {
    let mut carousel = manual(4);

    carousel.handle(CarouselEvent::Pointer(PointerEvent::touch_start(300.0)));
    carousel.handle(CarouselEvent::Pointer(PointerEvent::touch_end(240.0)));

    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_swipe_threshold_boundaries() {
    let cases = [(51.0, Some(Swipe::Next), 3), (50.0, None, 2), (-51.0, Some(Swipe::Previous), 1)];

    for (delta, expected, index) in cases {
        let mut carousel = manual(5);
        carousel.go_to(2).unwrap();

        carousel.on_gesture_start(200.0);
        assert_eq!(carousel.on_gesture_end(200.0 - delta), expected);
        assert_eq!(carousel.current_index(), index);
    }
}

#[test]
fn test_hover_during_gesture_keeps_autoplay_paused() {
    let mut carousel = Carousel::new(vec![1, 2, 3], CarouselConfig::default()).unwrap();

    carousel.handle(CarouselEvent::Pointer(PointerEvent::enter()));
    carousel.handle(CarouselEvent::Pointer(PointerEvent::down(200.0)));
    carousel.handle(CarouselEvent::Pointer(PointerEvent::up(100.0)));

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.pause_reasons(), PauseReasons::HOVER);
    assert!(!carousel.is_autoplay_running());

    carousel.handle(CarouselEvent::Pointer(PointerEvent::leave()));
    assert!(carousel.is_autoplay_running());
}

#[test]
fn test_keyboard_only_while_in_view() {
    let mut carousel = manual(3);

    carousel.handle(CarouselEvent::Key(KeyboardEvent::new("ArrowRight")));
    assert_eq!(carousel.current_index(), 1);

    carousel.handle(CarouselEvent::InView(false));
    carousel.handle(CarouselEvent::Key(KeyboardEvent::new("ArrowRight")));
    assert_eq!(carousel.current_index(), 1);

    carousel.handle(CarouselEvent::InView(true));
    carousel.handle(CarouselEvent::Key(KeyboardEvent::new("ArrowLeft")));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_real_timer_advances_and_hover_stops_it() {
    let config = CarouselConfig::default().with_interval(Duration::from_millis(20));
    let mut carousel = Carousel::new(vec!["a", "b", "c"], config).unwrap();

    // Wait for the first tick
    let mut handled = 0;
    for _ in 0..100 {
        handled += carousel.pump_timeout(Duration::from_millis(50));
        if carousel.current_index() > 0 {
            break;
        }
    }
    assert!(handled > 0);
    assert_ne!(carousel.current_index(), 0);

    carousel.on_pointer_enter();
    let paused_at = carousel.current_index();

    thread::sleep(Duration::from_millis(80));
    carousel.pump();
    assert_eq!(carousel.current_index(), paused_at);
}

#[test]
fn test_events_from_another_thread_are_serialized() {
    let mut carousel = manual(5);
    let tx = carousel.sender();

    let worker = thread::spawn(move || {
        for _ in 0..3 {
            tx.send(CarouselEvent::Next).unwrap();
        }
        tx.send(CarouselEvent::Dot(1)).unwrap();
    });
    worker.join().unwrap();

    assert_eq!(carousel.pump(), 4);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_mount_declines_without_slides() {
    assert!(Carousel::<String>::mount(Vec::new(), CarouselConfig::default()).is_none());
    assert!(Carousel::mount(vec![1], CarouselConfig::default()).is_some());
}
