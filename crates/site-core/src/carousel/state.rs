//! Pure carousel state and its derived render view.
//!
//! Every transition takes the slide count and returns a new state; none of
//! them can leave `active_index` outside `0..len` when `len >= 1`.

/// Index and autoplay flag owned by one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Currently displayed slide
    pub active_index: usize,
    /// Cleared for good by the first manual navigation
    pub autoplay_enabled: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CarouselState {
    /// State at mount: first slide, autoplay on.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            active_index: 0,
            autoplay_enabled: true,
        }
    }

    /// Next slide, wrapping to the first after the last.
    #[must_use]
    pub fn advanced(self, len: usize) -> Self {
        let active_index = self
            .active_index
            .checked_add(1)
            .and_then(|i| i.checked_rem(len))
            .unwrap_or(0);
        Self {
            active_index,
            ..self
        }
    }

    /// Previous slide, wrapping to the last before the first.
    #[must_use]
    pub fn retreated(self, len: usize) -> Self {
        let active_index = match self.active_index.checked_sub(1) {
            Some(i) => i,
            None => len.saturating_sub(1),
        };
        Self {
            active_index,
            ..self
        }
    }

    /// Jump to `index`, clamped to the last slide.
    #[must_use]
    pub fn jumped(self, index: usize, len: usize) -> Self {
        Self {
            active_index: index.min(len.saturating_sub(1)),
            ..self
        }
    }

    /// Same position with autoplay switched off.
    #[must_use]
    pub const fn without_autoplay(self) -> Self {
        Self {
            autoplay_enabled: false,
            ..self
        }
    }
}

/// What the slide renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselView {
    /// Currently displayed slide
    pub active_index: usize,
    /// Horizontal track offset in percent (`-active_index * 100`)
    pub offset_percent: i64,
    /// One flag per slide, `true` only for the active one
    pub indicators: Vec<bool>,
}

impl CarouselView {
    /// Derive the view for `len` slides.
    #[must_use]
    pub fn derive(state: CarouselState, len: usize) -> Self {
        if len == 0 {
            return Self::default();
        }

        let offset = i64::try_from(state.active_index)
            .unwrap_or(i64::MAX)
            .saturating_mul(100);

        Self {
            active_index: state.active_index,
            offset_percent: offset.saturating_neg(),
            indicators: (0..len).map(|i| i == state.active_index).collect(),
        }
    }

    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// CSS transform for the slide track.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }

    /// Whether indicator `index` is the active one.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.indicators.get(index).copied().unwrap_or(false)
    }
}
