//! Splash view shown once per launch.
//!
//! The sequence is finite: fade-in and scale-in start together, a fixed
//! dwell elapses, fade-out runs, then the shell switches to the tabs and
//! never comes back. One spawned timeline task drives the sequence and a
//! single `CancellationToken` guards it; dropping the splash cancels the
//! token, so the completion signal can never fire after teardown.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Color;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;

use crate::Theme;
use crate::ui::logo;

/// Animation durations, injected so tests can shrink them.
#[derive(Debug, Clone, Copy)]
pub struct SplashTimings {
    pub fade_in: Duration,
    pub dwell: Duration,
    pub fade_out: Duration,
}

impl Default for SplashTimings {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(1500),
            dwell: Duration::from_millis(2500),
            fade_out: Duration::from_millis(500),
        }
    }
}

#[derive(Debug)]
enum SplashSignal {
    FadeOutStarted,
    Finished,
}

pub struct Splash {
    timings: SplashTimings,
    started: Instant,
    fading_out_since: Option<Instant>,
    finished: bool,
    rx: UnboundedReceiver<SplashSignal>,
    token: CancellationToken,
}

impl Splash {
    /// Start the splash sequence. The timeline task begins counting the
    /// dwell immediately.
    pub fn start(timings: SplashTimings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let guard = token.clone();
        let dwell = timings.dwell;
        let fade_out = timings.fade_out;

        tokio::spawn(async move {
            let sequence = async {
                tokio::time::sleep(dwell).await;
                let _ = tx.send(SplashSignal::FadeOutStarted);
                tokio::time::sleep(fade_out).await;
                let _ = tx.send(SplashSignal::Finished);
            };
            tokio::select! {
                () = guard.cancelled() => {}
                () = sequence => {}
            }
        });

        Self {
            timings,
            started: Instant::now(),
            fading_out_since: None,
            finished: false,
            rx,
            token,
        }
    }

    /// Drain timeline signals. Returns true once the sequence completed;
    /// the caller then switches to the tab surface, exactly once.
    pub fn update(&mut self) -> bool {
        while let Ok(signal) = self.rx.try_recv() {
            match signal {
                SplashSignal::FadeOutStarted => self.fading_out_since = Some(Instant::now()),
                SplashSignal::Finished => self.finished = true,
            }
        }
        self.finished
    }

    fn cancel(&self) {
        self.token.cancel();
    }

    fn progress(elapsed: Duration, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn opacity(&self) -> f64 {
        self.fading_out_since.map_or_else(
            || Self::progress(self.started.elapsed(), self.timings.fade_in),
            |since| 1.0 - Self::progress(since.elapsed(), self.timings.fade_out),
        )
    }

    /// Scale-in runs concurrently with the fade-in, 0.8 -> 1.0.
    fn scale(&self) -> f64 {
        0.2f64.mul_add(
            Self::progress(self.started.elapsed(), self.timings.fade_in),
            0.8,
        )
    }

    pub fn view(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let opacity = self.opacity();
        let color = blend(theme.base, theme.accent, opacity);

        // Emulate the scale-in by letting the vertical inset shrink as
        // the scale approaches 1.
        let inset = ((1.0 - self.scale()) * 20.0).round() as u16;
        let logo_area = area.centered(
            Constraint::Percentage(100),
            Constraint::Length(logo::HEIGHT + inset),
        );

        frame.render_widget(logo::paragraph(color), logo_area);
    }
}

impl Drop for Splash {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Linear RGB blend used for the fade; `t` = 0 is `from`, 1 is `to`.
fn blend(from: Color, to: Color, t: f64) -> Color {
    let (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) = (from, to) else {
        return to;
    };
    let channel = |f: u8, t_channel: u8| -> u8 {
        let blended = f64::from(f) + (f64::from(t_channel) - f64::from(f)) * t;
        blended.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(
        channel(fr, tr),
        channel(fg, tg),
        channel(fb, tb),
    )
}
