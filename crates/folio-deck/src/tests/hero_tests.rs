use super::*;

#[derive(Default)]
struct Hero {
    reveals: usize,
    texts: Vec<(String, bool)>,
    opacities: Vec<f32>,
}

impl HeroRenderer for Hero {
    fn reveal_actions(&mut self) {
        self.reveals += 1;
    }

    fn set_subtext(&mut self, text: &str, typing: bool) {
        self.texts.push((text.to_owned(), typing));
    }

    fn set_subtext_opacity(&mut self, opacity: f32) {
        self.opacities.push(opacity);
    }
}

fn last_text(intro: &HeroIntro<Hero>) -> Option<&(String, bool)> {
    intro.renderer().texts.last()
}

#[test]
fn typing_pauses_after_punctuation() {
    let mut typing = TypingEffect::new("  Hi, yo ");
    typing.start(0.0);
    assert!(!typing.tick(219.0));
    assert_eq!(typing.visible_text(), "");

    assert!(typing.tick(220.0));
    assert_eq!(typing.visible_text(), "H");
    typing.tick(264.0);
    assert_eq!(typing.visible_text(), "Hi,");

    typing.tick(395.0);
    assert_eq!(typing.visible_text(), "Hi,", "comma holds the next character");
    typing.tick(396.0);
    assert_eq!(typing.visible_text(), "Hi, ");

    typing.tick(440.0);
    assert_eq!(typing.visible_text(), "Hi, yo");
    assert!(typing.is_finished());
    assert!(!typing.is_running());
}

#[test]
fn coarse_ticks_catch_up_without_slowing_down() {
    let mut typing = TypingEffect::new("abc");
    typing.start(100.0);
    assert!(typing.tick(10_000.0));
    assert_eq!(typing.visible_text(), "abc");
    assert!(typing.is_finished());
}

#[test]
fn reduced_motion_shows_everything_at_once() {
    let intro = HeroIntro::new(
        Hero::default(),
        Some("Engineer"),
        MotionPreference::Reduced,
        0.0,
    );
    assert!(intro.is_started());
    assert!(!intro.needs_frame());
    assert_eq!(intro.renderer().reveals, 1);
    assert_eq!(intro.renderer().opacities, vec![1.0]);
    assert!(intro.renderer().texts.is_empty(), "original text is left alone");
}

#[test]
fn fallback_starts_the_intro_when_the_title_stays_silent() {
    let mut intro = HeroIntro::new(Hero::default(), Some("Ok."), MotionPreference::Full, 0.0);
    assert!(intro.needs_frame());

    intro.tick(1_999.0);
    assert!(!intro.is_started());
    assert_eq!(intro.renderer().reveals, 0);

    intro.tick(2_000.0);
    assert!(intro.is_started());
    assert_eq!(intro.renderer().reveals, 1);
    assert_eq!(last_text(&intro), Some(&(String::new(), true)));
    assert_eq!(intro.renderer().opacities.first(), Some(&0.0));
}

#[test]
fn title_animation_end_starts_the_intro_once() {
    let mut intro = HeroIntro::new(Hero::default(), Some("Ok."), MotionPreference::Full, 0.0);
    intro.title_animation_ended(900.0);
    intro.title_animation_ended(950.0);
    intro.tick(3_000.0);
    assert_eq!(intro.renderer().reveals, 1);
    assert_eq!(last_text(&intro), Some(&("Ok.".to_owned(), false)));
    assert!(!intro.needs_frame());
}

#[test]
fn subtext_fades_in_while_typing() {
    let mut intro = HeroIntro::new(Hero::default(), Some("abc"), MotionPreference::Full, 0.0);
    intro.title_animation_ended(0.0);
    intro.tick(230.0);
    let opacity = *intro.renderer().opacities.last().expect("fading");
    assert!(opacity > 0.0 && opacity < 1.0);
    assert_eq!(last_text(&intro), Some(&("a".to_owned(), true)));

    intro.tick(600.0);
    assert_eq!(intro.renderer().opacities.last(), Some(&1.0));
    assert_eq!(last_text(&intro), Some(&("abc".to_owned(), false)));
}

#[test]
fn missing_subtext_only_reveals_actions() {
    let mut intro = HeroIntro::new(Hero::default(), Some("   "), MotionPreference::Full, 0.0);
    intro.title_animation_ended(10.0);
    intro.tick(5_000.0);
    assert_eq!(intro.renderer().reveals, 1);
    assert!(intro.renderer().texts.is_empty());
    assert!(intro.renderer().opacities.is_empty());
}
