//! Leptos Star Rating
//!
//! Five-star rating control for Leptos driven by pointer events.
//! Hovering a star previews a value, clicking commits it, and leaving
//! the row restores whatever was last committed.

use leptos::prelude::*;

/// Number of star controls in the row
pub const STAR_COUNT: u8 = 5;

/// Visual mark of a single star slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotMark {
    /// Filled by a committed value (class toggle)
    Active,
    /// Empty under a committed value
    Inactive,
    /// Filled by a hover preview (style override)
    Highlighted,
    /// Empty under a hover preview
    Dimmed,
}

impl SlotMark {
    pub fn is_on(self) -> bool {
        matches!(self, SlotMark::Active | SlotMark::Highlighted)
    }

    pub fn class(self) -> &'static str {
        match self {
            SlotMark::Active => "star active",
            _ => "star",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            SlotMark::Highlighted => "color: var(--accent-color)",
            SlotMark::Dimmed => "color: var(--border-color)",
            _ => "",
        }
    }
}

/// Marks for every slot given a value.
///
/// Slots with index < value are on, the rest are off. `is_committed`
/// only picks the durable marks over the transient hover marks.
pub fn update_display(value: u8, is_committed: bool) -> [SlotMark; STAR_COUNT as usize] {
    std::array::from_fn(|index| {
        let on = index < usize::from(value);
        match (is_committed, on) {
            (true, true) => SlotMark::Active,
            (true, false) => SlotMark::Inactive,
            (false, true) => SlotMark::Highlighted,
            (false, false) => SlotMark::Dimmed,
        }
    })
}

/// Committed value plus the optional hover preview.
///
/// `committed == 0` means nothing has been selected yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RatingState {
    committed: u8,
    preview: Option<u8>,
}

impl RatingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn preview_value(&self) -> Option<u8> {
        self.preview
    }

    /// Lock in a value. Returns false (and changes nothing) outside 1..=5.
    pub fn commit(&mut self, value: u8) -> bool {
        if !(1..=STAR_COUNT).contains(&value) {
            return false;
        }
        self.committed = value;
        self.preview = None;
        true
    }

    pub fn preview(&mut self, value: u8) {
        if (1..=STAR_COUNT).contains(&value) {
            self.preview = Some(value);
        }
    }

    pub fn reset_preview(&mut self) {
        self.preview = None;
    }

    /// Back to "nothing selected"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// What the row shows right now
    pub fn slots(&self) -> [SlotMark; STAR_COUNT as usize] {
        match self.preview {
            Some(value) => update_display(value, false),
            None => update_display(self.committed, true),
        }
    }

    pub fn caption(&self) -> String {
        if self.committed == 0 {
            "Select a rating".to_string()
        } else {
            format!("{} of {} stars", self.committed, STAR_COUNT)
        }
    }
}

/// Rating state signals
#[derive(Clone, Copy)]
pub struct RatingSignals {
    pub state_read: ReadSignal<RatingState>,
    pub state_write: WriteSignal<RatingState>,
}

impl RatingSignals {
    /// Committed value without subscribing
    pub fn committed(&self) -> u8 {
        self.state_read.get_untracked().committed()
    }
}

pub fn create_rating_signals() -> RatingSignals {
    let (state_read, state_write) = signal(RatingState::new());
    RatingSignals {
        state_read,
        state_write,
    }
}

/// Reset to no selection (after a successful submit)
pub fn clear_rating(rating: &RatingSignals) {
    rating.state_write.update(|state| state.clear());
}

/// Create click handler for the star at `value`
pub fn make_on_star_click(rating: RatingSignals, value: u8) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        rating.state_write.update(|state| {
            state.commit(value);
        });
    }
}

/// Create mouseover handler for the star at `value`
pub fn make_on_star_mouseover(rating: RatingSignals, value: u8) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        rating.state_write.update(|state| state.preview(value));
    }
}

/// Create mouseleave handler for the whole row
pub fn make_on_row_mouseleave(rating: RatingSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if rating.state_read.get_untracked().preview_value().is_some() {
            rating.state_write.update(|state| state.reset_preview());
        }
    }
}

/// Row of five stars, a hidden input carrying the committed value, and a caption
#[component]
pub fn StarRating(
    rating: RatingSignals,
    #[prop(optional, into)] input_name: Option<String>,
) -> impl IntoView {
    let input_name = input_name.unwrap_or_else(|| "rating".to_string());

    view! {
        <div class="rating-input">
            <div class="stars-container" on:mouseleave=make_on_row_mouseleave(rating)>
                {(1..=STAR_COUNT).map(|value| {
                    let index = usize::from(value - 1);
                    view! {
                        <span
                            class=move || rating.state_read.get().slots()[index].class()
                            style=move || rating.state_read.get().slots()[index].style()
                            data-value=value.to_string()
                            on:click=make_on_star_click(rating, value)
                            on:mouseover=make_on_star_mouseover(rating, value)
                        >
                            "★"
                        </span>
                    }
                }).collect_view()}
            </div>
            <input
                type="hidden"
                name=input_name
                prop:value=move || rating.state_read.get().committed().to_string()
            />
            <span class="rating-text">{move || rating.state_read.get().caption()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_count(slots: &[SlotMark]) -> usize {
        slots.iter().filter(|mark| mark.is_on()).count()
    }

    #[test]
    fn test_initial_state_has_no_selection() {
        let state = RatingState::new();
        assert_eq!(state.committed(), 0);
        assert_eq!(state.caption(), "Select a rating");
        assert!(state.slots().iter().all(|mark| *mark == SlotMark::Inactive));
    }

    #[test]
    fn test_commit_marks_slots_up_to_value() {
        let mut state = RatingState::new();
        assert!(state.commit(3));

        let slots = state.slots();
        assert_eq!(slots[..3], [SlotMark::Active; 3]);
        assert_eq!(slots[3..], [SlotMark::Inactive; 2]);
        assert_eq!(state.caption(), "3 of 5 stars");
    }

    #[test]
    fn test_commit_rejects_out_of_range() {
        let mut state = RatingState::new();
        state.commit(2);

        assert!(!state.commit(0));
        assert!(!state.commit(6));
        assert_eq!(state.committed(), 2);
    }

    #[test]
    fn test_preview_does_not_touch_committed() {
        let mut state = RatingState::new();
        state.commit(2);
        state.preview(4);

        assert_eq!(state.committed(), 2);
        let slots = state.slots();
        assert_eq!(on_count(&slots), 4);
        assert_eq!(slots[0], SlotMark::Highlighted);
        assert_eq!(slots[4], SlotMark::Dimmed);
        // Caption follows the committed value only
        assert_eq!(state.caption(), "2 of 5 stars");
    }

    #[test]
    fn test_reset_preview_restores_committed() {
        let mut state = RatingState::new();
        state.commit(2);
        state.preview(5);
        state.reset_preview();

        assert_eq!(state.slots(), update_display(2, true));
    }

    #[test]
    fn test_reset_preview_without_commit_shows_nothing() {
        let mut state = RatingState::new();
        state.preview(4);
        state.reset_preview();

        assert_eq!(on_count(&state.slots()), 0);
    }

    #[test]
    fn test_commit_clears_preview() {
        let mut state = RatingState::new();
        state.preview(4);
        state.commit(4);

        assert_eq!(state.preview_value(), None);
        assert_eq!(state.slots(), [SlotMark::Active, SlotMark::Active, SlotMark::Active, SlotMark::Active, SlotMark::Inactive]);
    }

    #[test]
    fn test_clear_returns_to_unset() {
        let mut state = RatingState::new();
        state.commit(5);
        state.clear();

        assert_eq!(state, RatingState::new());
    }

    #[test]
    fn test_update_display_threshold_is_shared() {
        for value in 0..=STAR_COUNT {
            let durable = update_display(value, true);
            let transient = update_display(value, false);
            for index in 0..usize::from(STAR_COUNT) {
                assert_eq!(durable[index].is_on(), transient[index].is_on());
            }
            assert_eq!(on_count(&durable), usize::from(value));
        }
    }
}
