//! Interaction feedback: owned sound handles and the particle engine
//! behind the fullscreen confetti overlay.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlAudioElement;

pub const HOVER_SOUND_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-video-game-retro-click-237.wav";
pub const CLICK_SOUND_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-classic-click-1117.wav";
pub const SUCCESS_SOUND_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-arcade-game-jump-coin-216.wav";

/// Sparkle palette for hover and photo-click feedback.
pub const SPARKLE_COLORS: &[&str] = &["#FFD700", "#FFA500", "#FF69B4"];
/// Wider palette for milestone and RSVP celebrations.
pub const PARTY_COLORS: &[&str] = &[
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d", "#ff36ff",
];

// ---------------- Sounds -----------------

/// Owned audio handles. A handle that failed to build stays None and the
/// play calls do nothing.
pub struct SoundBank {
    hover: Option<HtmlAudioElement>,
    click: Option<HtmlAudioElement>,
    success: Option<HtmlAudioElement>,
}

impl SoundBank {
    pub fn load() -> Self {
        Self {
            hover: load_sound(HOVER_SOUND_URL, 0.5),
            click: load_sound(CLICK_SOUND_URL, 0.5),
            success: load_sound(SUCCESS_SOUND_URL, 0.7),
        }
    }

    pub fn hover(&self) {
        replay(&self.hover);
    }

    pub fn click(&self) {
        replay(&self.click);
    }

    pub fn success(&self) {
        replay(&self.success);
    }
}

fn load_sound(url: &str, volume: f64) -> Option<HtmlAudioElement> {
    let audio = HtmlAudioElement::new_with_src(url).ok()?;
    audio.set_preload("auto");
    audio.set_volume(volume);
    Some(audio)
}

fn replay(slot: &Option<HtmlAudioElement>) {
    if let Some(audio) = slot {
        audio.set_current_time(0.0);
        // Autoplay may be blocked before the first user gesture.
        let _ = audio.play();
    }
}

// ---------------- Confetti -----------------

/// One burst request. Origin is in viewport fractions (0..=1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub count: u32,
    pub spread_deg: f64,
    pub origin: (f64, f64),
    pub gravity: f64,
    pub scalar: f64,
    pub ticks: u32,
    pub colors: &'static [&'static str],
}

impl Burst {
    /// Small golden shower under the hovered heading.
    pub fn sparkles() -> Self {
        Self {
            count: 15,
            spread_deg: 30.0,
            origin: (0.5, 0.8),
            gravity: 0.5,
            scalar: 0.7,
            ticks: 50,
            colors: SPARKLE_COLORS,
        }
    }

    /// Tiny pop centered on a clicked element.
    pub fn mini(origin: (f64, f64)) -> Self {
        Self {
            count: 8,
            spread_deg: 20.0,
            origin,
            gravity: 0.3,
            scalar: 0.5,
            ticks: 30,
            colors: SPARKLE_COLORS,
        }
    }

    /// Every-tenth-click celebration.
    pub fn milestone() -> Self {
        Self {
            count: 100,
            spread_deg: 50.0,
            origin: (0.5, 0.5),
            gravity: 1.0,
            scalar: 1.0,
            ticks: 90,
            colors: PARTY_COLORS,
        }
    }

    /// The big thank-you blast after an accepted RSVP.
    pub fn rsvp_blast() -> Self {
        Self {
            count: 300,
            spread_deg: 150.0,
            origin: (0.5, 0.6),
            gravity: 1.0,
            scalar: 1.0,
            ticks: 90,
            colors: PARTY_COLORS,
        }
    }
}

/// A live particle in canvas pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub gravity: f64,
    pub color: &'static str,
    pub ticks_left: u32,
    pub ticks_total: u32,
}

impl Particle {
    /// Remaining-life fraction, used as draw alpha.
    pub fn alpha(&self) -> f64 {
        if self.ticks_total == 0 {
            return 0.0;
        }
        self.ticks_left as f64 / self.ticks_total as f64
    }
}

/// Downward pull per frame, scaled by each burst's gravity factor.
const GRAVITY_PER_TICK: f64 = 0.18;
/// Horizontal damping so streams fan out instead of flying straight.
const DRAG: f64 = 0.99;

/// Spawns `burst.count` particles into `particles`. `rand` supplies values
/// in [0, 1); the overlay passes Math.random, tests pass a fixed source.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    burst: &Burst,
    viewport: (f64, f64),
    mut rand: impl FnMut() -> f64,
) {
    let (vw, vh) = viewport;
    let origin_x = burst.origin.0 * vw;
    let origin_y = burst.origin.1 * vh;
    let spread = burst.spread_deg.to_radians();
    let ticks = burst.ticks.max(1);
    for _ in 0..burst.count {
        // Launch upward inside the spread cone.
        let angle = (rand() - 0.5) * spread;
        let speed = (7.0 + rand() * 6.0) * burst.scalar;
        let color_idx =
            ((rand() * burst.colors.len() as f64) as usize).min(burst.colors.len() - 1);
        particles.push(Particle {
            x: origin_x,
            y: origin_y,
            vx: angle.sin() * speed,
            vy: -angle.cos() * speed,
            size: (3.0 + rand() * 4.0) * burst.scalar,
            gravity: burst.gravity,
            color: burst.colors[color_idx],
            ticks_left: ticks,
            ticks_total: ticks,
        });
    }
}

/// Advances every particle one frame and drops the expired ones.
pub fn step_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.vy += GRAVITY_PER_TICK * p.gravity;
        p.vx *= DRAG;
        p.x += p.vx;
        p.y += p.vy;
        p.ticks_left = p.ticks_left.saturating_sub(1);
    }
    particles.retain(|p| p.ticks_left > 0);
}

// ---------------- Handles -----------------

/// Cloneable handle the views use to request bursts; the overlay drains
/// and draws the shared particle vector.
#[derive(Clone, Default)]
pub struct ConfettiHandle {
    particles: Rc<RefCell<Vec<Particle>>>,
}

impl ConfettiHandle {
    pub fn burst(&self, burst: Burst) {
        spawn_burst(
            &mut self.particles.borrow_mut(),
            &burst,
            viewport_size(),
            js_sys::Math::random,
        );
    }

    pub fn particles(&self) -> &Rc<RefCell<Vec<Particle>>> {
        &self.particles
    }
}

impl PartialEq for ConfettiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.particles, &other.particles)
    }
}

/// Shared feedback handles, provided once by the app shell.
#[derive(Clone)]
pub struct Fx {
    pub sounds: Rc<SoundBank>,
    pub confetti: ConfettiHandle,
}

impl Fx {
    pub fn load() -> Self {
        Self {
            sounds: Rc::new(SoundBank::load()),
            confetti: ConfettiHandle::default(),
        }
    }
}

impl PartialEq for Fx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sounds, &other.sounds) && self.confetti == other.confetti
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Viewport-fraction center of the clicked element, for mini bursts.
pub fn click_origin(event: &web_sys::MouseEvent) -> (f64, f64) {
    let (vw, vh) = viewport_size();
    if vw <= 0.0 || vh <= 0.0 {
        return (0.5, 0.5);
    }
    let rect = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect());
    match rect {
        Some(r) => (
            (r.left() + r.width() / 2.0) / vw,
            (r.top() + r.height() / 2.0) / vh,
        ),
        None => (0.5, 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycling(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn a_burst_spawns_exactly_count_particles() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::milestone(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        assert_eq!(particles.len(), 100);
    }

    #[test]
    fn particles_start_at_the_burst_origin() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::sparkles(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        for p in &particles {
            assert_eq!((p.x, p.y), (500.0, 640.0));
        }
    }

    #[test]
    fn colors_come_from_the_burst_palette() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::mini((0.2, 0.3)),
            (1000.0, 800.0),
            cycling(&[0.0, 0.37, 0.99]),
        );
        for p in &particles {
            assert!(SPARKLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn a_rand_source_near_one_still_indexes_inside_the_palette() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::milestone(),
            (100.0, 100.0),
            cycling(&[0.999_999]),
        );
        for p in &particles {
            assert!(PARTY_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn gravity_bends_the_launch_back_down() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::milestone(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        let launch_vy = particles[0].vy;
        assert!(launch_vy < 0.0);
        for _ in 0..89 {
            step_particles(&mut particles);
        }
        assert!(particles[0].vy > launch_vy);
    }

    #[test]
    fn particles_expire_when_their_ticks_run_out() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::mini((0.5, 0.5)),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        for _ in 0..29 {
            step_particles(&mut particles);
        }
        assert_eq!(particles.len(), 8);
        step_particles(&mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn alpha_fades_with_remaining_life() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::sparkles(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        assert_eq!(particles[0].alpha(), 1.0);
        for _ in 0..25 {
            step_particles(&mut particles);
        }
        assert_eq!(particles[0].alpha(), 0.5);
    }

    #[test]
    fn bursts_keep_their_own_gravity() {
        let mut particles = Vec::new();
        spawn_burst(
            &mut particles,
            &Burst::sparkles(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        spawn_burst(
            &mut particles,
            &Burst::milestone(),
            (1000.0, 800.0),
            cycling(&[0.5]),
        );
        assert_eq!(particles[0].gravity, 0.5);
        assert_eq!(particles[15].gravity, 1.0);
    }
}
