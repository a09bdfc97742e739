//! Testimonials Demo - the carousel driving a terminal view
//!
//! This demo wires everything together:
//! - Autoplay every 6 seconds, wrapping at the end
//! - Left/Right arrows navigate
//! - Click-drag across the track to swipe
//! - Hovering the track pauses autoplay
//! - One render effect redraws on every index change
//!
//! Run with: cargo run --example testimonials
//! Logs: CAROUSEL_LOG=debug cargo run --example testimonials (writes carousel-demo.log)

use std::fs::File;
use std::io::{self, Write, stdout};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, KeyCode};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use spark_signals::{effect, signal, Signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spark_carousel::state::input::{
    disable_mouse, enable_mouse, poll_event, TerminalInput, TrackBounds,
};
use spark_carousel::{Carousel, CarouselConfig, CarouselEvent, RenderState};

#[derive(Clone)]
struct Testimonial {
    quote: &'static str,
    author: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "They shipped our launch site in two weeks and it never went down.",
        author: "Operations lead, logistics startup",
    },
    Testimonial {
        quote: "Clear process, honest estimates, no surprises on the invoice.",
        author: "Founder, design studio",
    },
    Testimonial {
        quote: "Our sign-ups doubled after the redesign.",
        author: "Marketing director, fintech",
    },
    Testimonial {
        quote: "The only agency that answered the phone on a Sunday.",
        author: "Owner, family restaurant group",
    },
];

const TRACK_TOP: u16 = 2;
const TRACK_HEIGHT: u16 = 6;

fn track_bounds(width: u16) -> TrackBounds {
    TrackBounds::new(0, TRACK_TOP, width, TRACK_HEIGHT)
}

fn init_logging() -> io::Result<()> {
    let Ok(filter) = std::env::var("CAROUSEL_LOG") else {
        return Ok(());
    };
    let file = File::create("carousel-demo.log")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn draw(
    out: &mut impl Write,
    width: u16,
    slide: &Testimonial,
    state: RenderState,
    dots: &[bool],
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("What our clients say"),
        SetAttribute(Attribute::Reset)
    )?;

    // Track
    let inner = width.saturating_sub(4) as usize;
    queue!(out, MoveTo(0, TRACK_TOP), Print(format!("┌{}┐", "─".repeat(inner + 2))))?;
    let quote: String = slide.quote.chars().take(inner).collect();
    let author: String = format!("— {}", slide.author).chars().take(inner).collect();
    let lines = ["", quote.as_str(), "", author.as_str()];
    for (i, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, TRACK_TOP + 1 + i as u16), Print(format!("│ {line:<inner$} │")))?;
    }
    queue!(
        out,
        MoveTo(0, TRACK_TOP + TRACK_HEIGHT - 1),
        Print(format!("└{}┘", "─".repeat(inner + 2)))
    )?;

    // Controls and dots
    let prev = if state.previous_disabled { "   " } else { " < " };
    let next = if state.next_disabled { "   " } else { " > " };
    let dots: String = dots
        .iter()
        .map(|active| if *active { "● " } else { "○ " })
        .collect();
    queue!(
        out,
        MoveTo(0, TRACK_TOP + TRACK_HEIGHT + 1),
        Print(format!("{prev} {dots}{next}   {}", state.css_transform()))
    )?;
    queue!(
        out,
        MoveTo(0, TRACK_TOP + TRACK_HEIGHT + 3),
        Print("←/→ navigate · drag to swipe · hover pauses · 1-4 jump · q quits")
    )?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let (width, height) = terminal::size()?;
    let mut carousel = Carousel::new(TESTIMONIALS.to_vec(), CarouselConfig::default())?;
    let bounds = track_bounds(width);
    let mut input = TerminalInput::new(bounds);
    carousel.set_viewport(bounds.viewport_rect(), height as f32);

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    enable_mouse()?;

    // The ONE render effect
    let width = signal(width);
    let draw_width = width.clone();
    let render = carousel.render_signal();
    let dots = carousel.dot_signals().to_vec();
    let slides = carousel.slides().to_vec();
    let stop = effect(move || {
        let state = render.get();
        let active: Vec<bool> = dots.iter().map(|dot| dot.get()).collect();
        let _ = draw(&mut stdout(), draw_width.get(), &slides[state.index], state, &active);
    });

    let result = run(&mut carousel, &mut input, &width);

    stop();
    carousel.dispose();
    disable_mouse()?;
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    carousel: &mut Carousel<Testimonial>,
    input: &mut TerminalInput,
    width: &Signal<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Some(event) = poll_event(Duration::from_millis(50))? {
            if let Event::Key(key) = &event {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if index < carousel.len() {
                            carousel.handle(CarouselEvent::Dot(index));
                        }
                    }
                    _ => {}
                }
            }
            // Keep the hit area and viewport rect in step with the terminal
            if let Event::Resize(columns, _) = &event {
                input.set_bounds(track_bounds(*columns));
                width.set(*columns);
            }
            for event in input.translate(&event) {
                carousel.handle(event);
            }
        }
        // Autoplay ticks
        carousel.pump();
    }
}
