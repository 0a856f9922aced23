#![cfg(not(target_arch = "wasm32"))]

use folio_wasm::theme::Theme;
use folio_wasm::wave::{self, Point};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn baselines_are_evenly_spaced() {
    // 800x600 scenario: baselines land on multiples of 50.
    for i in 0..wave::WAVE_COUNT {
        assert!(approx_eq(
            wave::baseline(i, 600.0),
            i as f64 * 50.0,
            1e-12
        ));
    }
    // Degenerate surface collapses every baseline to zero.
    for i in 0..wave::WAVE_COUNT {
        assert_eq!(wave::baseline(i, 0.0), 0.0);
    }
}

#[test]
fn hue_ramp_wraps_at_360() {
    let expected = [
        50.0, 150.0, 250.0, 350.0, 90.0, 190.0, 290.0, 30.0, 130.0, 230.0, 330.0, 70.0,
    ];
    for (i, want) in expected.iter().enumerate() {
        let style = wave::style(i);
        assert!(approx_eq(style.hue, *want, 1e-12), "wave {i}: {}", style.hue);
        assert!((0.0..360.0).contains(&style.hue));
    }
}

#[test]
fn lightness_and_alpha_follow_index() {
    for i in 0..wave::WAVE_COUNT {
        let style = wave::style(i);
        assert!(approx_eq(style.lightness, 50.0 + i as f64 * 3.0, 1e-12));
        assert!(approx_eq(style.alpha, 0.6 - i as f64 * 0.03, 1e-12));
    }
}

#[test]
fn alpha_clamps_to_transparent_not_negative() {
    // Indices past the configured count would go negative under the raw
    // formula; the style clamps instead.
    assert_eq!(wave::style(25).alpha, 0.0);
    assert_eq!(wave::style(100).alpha, 0.0);
    for i in 0..wave::WAVE_COUNT {
        assert!(wave::style(i).alpha >= 0.0);
    }
}

#[test]
fn style_css_is_hsla() {
    let css = wave::style(0).css();
    assert_eq!(css, "hsla(50, 100%, 50%, 0.6)");
}

#[test]
fn pointer_effect_is_zero_beyond_radius() {
    assert_eq!(wave::pointer_effect(wave::POINTER_RADIUS), 0.0);
    assert_eq!(wave::pointer_effect(wave::POINTER_RADIUS + 1.0), 0.0);
    assert_eq!(wave::pointer_effect(1e9), 0.0);
}

#[test]
fn pointer_effect_grows_monotonically_toward_pointer() {
    let mut prev = wave::pointer_effect(wave::POINTER_RADIUS);
    let mut d = wave::POINTER_RADIUS - 1.0;
    while d >= 0.0 {
        let e = wave::pointer_effect(d);
        assert!(e > prev, "effect not increasing at distance {d}");
        prev = e;
        d -= 1.0;
    }
    // Full strength directly under the pointer.
    assert!(approx_eq(wave::pointer_effect(0.0), 80.0, 1e-12));
}

#[test]
fn sample_y_is_deterministic() {
    let pointer = Point::new(400.0, 300.0);
    for i in [0, 5, 11] {
        for x in [0.0, 5.0, 123.0, 795.0] {
            let a = wave::sample_y(i, x, 17.25, 600.0, pointer);
            let b = wave::sample_y(i, x, 17.25, 600.0, pointer);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn far_pointer_does_not_bend_the_wave() {
    // Both pointers are beyond the proximity radius of every sample, so the
    // ripple term vanishes and the curves coincide.
    for x in [0.0, 50.0, 400.0, 795.0] {
        let a = wave::sample_y(3, x, 2.0, 600.0, Point::new(5_000.0, 5_000.0));
        let b = wave::sample_y(3, x, 2.0, 600.0, Point::new(-9_000.0, 7_000.0));
        assert_eq!(a, b);
    }
}

#[test]
fn displacement_stays_within_amplitude_bounds() {
    // wave1 + wave2 + wave3 bound at 69; ripple bound at 80.
    let pointer = Point::new(400.0, 300.0);
    for i in 0..wave::WAVE_COUNT {
        let base = wave::baseline(i, 600.0);
        for step in 0..160 {
            let x = step as f64 * wave::SAMPLE_STEP;
            let y = wave::sample_y(i, x, 31.7, 600.0, pointer);
            assert!((y - base).abs() <= 149.0 + 1e-9, "wave {i} at x={x}: y={y}");
        }
    }
}

#[test]
fn particles_orbit_within_their_band() {
    let pointer = Point::new(400.0, 300.0);
    for i in 0..wave::PARTICLE_COUNT {
        for t in [0.0, 0.4, 2.9, 1234.5] {
            let p = wave::particle(i, t, pointer);
            let d = p.center.distance(pointer);
            assert!((20.0 - 1e-9..=80.0 + 1e-9).contains(&d), "particle {i}: d={d}");
            assert!((0.5..=3.5).contains(&p.size));
            assert!(approx_eq(p.glow_radius(), p.size * 3.0, 1e-12));
        }
    }
}

#[test]
fn particle_positions_are_deterministic() {
    let pointer = Point::new(10.0, 20.0);
    for i in 0..wave::PARTICLE_COUNT {
        assert_eq!(wave::particle(i, 5.5, pointer), wave::particle(i, 5.5, pointer));
    }
}

#[test]
fn theme_selects_background_fill() {
    assert_eq!(Theme::from_dark(true).background(), "#000000");
    assert_eq!(Theme::from_dark(false).background(), "#f3f4f6");
    assert_eq!(Theme::default(), Theme::Dark);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    // A full toggle cycle lands back on the starting mode.
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn content_tables_match_section_layout() {
    use folio_wasm::content;

    assert_eq!(content::SECTIONS, ["intro", "work", "thoughts", "connect"]);
    assert_eq!(content::JOBS.len(), 4);
    assert_eq!(content::PROJECTS.len(), 6);
    // Every project with a link has an absolute URL.
    for project in &content::PROJECTS {
        if let Some(url) = project.url {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
