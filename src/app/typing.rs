use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

/// Which stage of the type/hold/delete cycle the effect is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Waiting,
    Deleting,
}

/// Word cycler backing [`TypingEffect`].
///
/// Holds the whole state machine so the timing law can be exercised without
/// a browser; the component only schedules `step()` calls and renders
/// `text()`. Words are handled as `char` sequences, so the displayed text is
/// always a valid prefix of the target word.
#[derive(Debug, Clone)]
pub struct Cycler {
    words: Vec<String>,
    index: usize,
    text: String,
    phase: Phase,
    typing_speed: u64,
    deleting_speed: u64,
    delay_between: u64,
}

impl Cycler {
    pub fn new(
        words: Vec<String>,
        typing_speed: u64,
        deleting_speed: u64,
        delay_between: u64,
    ) -> Self {
        Self {
            words,
            index: 0,
            text: String::new(),
            phase: Phase::Typing,
            typing_speed,
            deleting_speed,
            delay_between,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_index(&self) -> usize {
        self.index
    }

    /// Milliseconds until the next [`step`](Self::step), or `None` when
    /// there is nothing to animate (empty word list).
    pub fn delay(&self) -> Option<u64> {
        if self.words.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.typing_speed,
            Phase::Waiting => self.delay_between,
            Phase::Deleting => self.deleting_speed,
        })
    }

    /// Apply one timer tick worth of mutation.
    pub fn step(&mut self) {
        let Some(word) = self.words.get(self.index) else {
            return;
        };
        match self.phase {
            Phase::Typing => {
                let typed = self.text.chars().count();
                if let Some(c) = word.chars().nth(typed) {
                    self.text.push(c);
                }
                if self.text == *word {
                    self.phase = Phase::Waiting;
                }
            }
            Phase::Waiting => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.index = (self.index + 1) % self.words.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

/// Rotating typed-text effect: types each word character-by-character, holds
/// it, deletes it, then advances to the next word, forever. `colors` is a
/// list of utility classes indexed by the current word modulo its length.
///
/// An empty `words` list renders nothing and arms no timer.
#[component]
pub fn TypingEffect(
    words: Vec<String>,
    colors: Vec<String>,
    #[prop(default = 100)] typing_speed: u64,
    #[prop(default = 60)] deleting_speed: u64,
    #[prop(default = 1500)] delay_between: u64,
) -> impl IntoView {
    let cycler = StoredValue::new(Cycler::new(
        words,
        typing_speed,
        deleting_speed,
        delay_between,
    ));
    let (display, set_display) = signal((String::new(), 0usize));
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    // Effects only run in the browser, so the server renders the empty
    // initial state and the loop starts after hydration.
    Effect::new(move |_| {
        arm(cycler, set_display, pending);
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let color_for = move |i: usize| {
        if colors.is_empty() {
            String::new()
        } else {
            colors[i % colors.len()].clone()
        }
    };

    // nothing to cycle, nothing to render
    let has_words = cycler.with_value(|c| c.delay().is_some());

    view! {
        <span class=move || {
            format!("font-semibold tracking-wide p-1 {}", color_for(display.get().1))
        }>
            {move || display.get().0}
            {has_words.then(|| view! { <span class="caret-blink">"|"</span> })}
        </span>
    }
}

// One mutation per callback, then re-arm. Exactly one timeout is pending at
// any instant; the handle is stored so cleanup can cancel it.
fn arm(
    cycler: StoredValue<Cycler>,
    set_display: WriteSignal<(String, usize)>,
    pending: StoredValue<Option<TimeoutHandle>, LocalStorage>,
) {
    let Some(delay) = cycler.with_value(|c| c.delay()) else {
        return;
    };
    let handle = set_timeout_with_handle(
        move || {
            cycler.update_value(|c| c.step());
            set_display.set(cycler.with_value(|c| (c.text().to_string(), c.word_index())));
            arm(cycler, set_display, pending);
        },
        Duration::from_millis(delay),
    )
    .ok();
    pending.set_value(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(words: &[&str], typing: u64, deleting: u64, delay: u64) -> Cycler {
        Cycler::new(
            words.iter().map(|s| s.to_string()).collect(),
            typing,
            deleting,
            delay,
        )
    }

    // Advance one tick, returning the elapsed delay.
    fn tick(c: &mut Cycler) -> u64 {
        let delay = c.delay().expect("non-empty cycler should have a delay");
        c.step();
        delay
    }

    #[test]
    fn follows_the_documented_timeline() {
        // words = ["Go", "Rust"], typing 100, deleting 50, hold 200
        let mut c = cycler(&["Go", "Rust"], 100, 50, 200);
        let mut t = 0;
        assert_eq!(c.text(), "");

        t += tick(&mut c);
        assert_eq!((t, c.text()), (100, "G"));
        t += tick(&mut c);
        assert_eq!((t, c.text()), (200, "Go"));
        // hold the full word, no text change
        t += tick(&mut c);
        assert_eq!((t, c.text()), (400, "Go"));
        t += tick(&mut c);
        assert_eq!((t, c.text()), (450, "G"));
        t += tick(&mut c);
        assert_eq!((t, c.text()), (500, ""));
        assert_eq!(c.word_index(), 1);
        t += tick(&mut c);
        assert_eq!((t, c.text()), (600, "R"));
    }

    #[test]
    fn phase_durations_scale_with_word_length() {
        let word = "Typescript";
        let n = word.chars().count() as u64;
        let mut c = cycler(&[word], 70, 30, 400);

        let mut typing_time = 0;
        while c.text() != word {
            typing_time += tick(&mut c);
        }
        assert_eq!(typing_time, n * 70);

        let hold = tick(&mut c);
        assert_eq!(hold, 400);

        let mut deleting_time = 0;
        while !c.text().is_empty() {
            deleting_time += tick(&mut c);
        }
        assert_eq!(deleting_time, n * 30);
    }

    #[test]
    fn visits_every_word_in_order_indefinitely() {
        let words = ["React", "Node.js", "Rust"];
        let mut c = cycler(&words, 10, 5, 50);
        let mut completed = Vec::new();
        while completed.len() < 7 {
            let before = c.text().to_string();
            c.step();
            // a word is complete the moment the full text first appears
            if c.text() == words[c.word_index()] && before != c.text() {
                completed.push(c.text().to_string());
            }
        }
        assert_eq!(
            completed,
            ["React", "Node.js", "Rust", "React", "Node.js", "Rust", "React"]
        );
    }

    #[test]
    fn text_is_always_a_prefix_of_the_target_word() {
        let words = ["héllo", "日本語", "ok"];
        let mut c = cycler(&words, 10, 5, 50);
        for _ in 0..500 {
            c.step();
            let target = words[c.word_index()];
            assert!(target.starts_with(c.text()), "{:?} not a prefix of {target:?}", c.text());
            assert!(c.text().chars().count() <= target.chars().count());
        }
    }

    #[test]
    fn one_full_cycle_returns_to_the_initial_state() {
        let words = ["Go", "Rust"];
        let mut c = cycler(&words, 100, 50, 200);
        // per word: N typing steps + 1 hold + N deleting steps
        let steps: usize = words.iter().map(|w| 2 * w.chars().count() + 1).sum();
        for _ in 0..steps {
            c.step();
        }
        assert_eq!(c.text(), "");
        assert_eq!(c.word_index(), 0);
        assert_eq!(c.delay(), Some(100));
    }

    #[test]
    fn single_word_loops_on_itself() {
        let mut c = cycler(&["Rust"], 10, 5, 50);
        for _ in 0..100 {
            c.step();
            assert_eq!(c.word_index(), 0);
        }
    }

    #[test]
    fn empty_word_list_is_inert() {
        let mut c = Cycler::new(Vec::new(), 100, 60, 1500);
        assert_eq!(c.delay(), None);
        for _ in 0..10 {
            c.step();
        }
        assert_eq!(c.text(), "");
        assert_eq!(c.word_index(), 0);
    }
}
