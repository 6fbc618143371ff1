/// Which side of a two-sided card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

/// Hover-to-flip card with a click toggle for pointers that cannot hover.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlipCard {
    face: CardFace,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_enter(&mut self) {
        self.face = CardFace::Back;
    }

    pub fn on_pointer_leave(&mut self) {
        self.face = CardFace::Front;
    }

    pub fn on_click(&mut self) {
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_flips_and_restores() {
        let mut card = FlipCard::new();
        card.on_pointer_enter();
        assert!(card.is_flipped());
        card.on_pointer_leave();
        assert_eq!(card.face(), CardFace::Front);
    }

    #[test]
    fn click_toggles() {
        let mut card = FlipCard::new();
        card.on_click();
        assert!(card.is_flipped());
        card.on_click();
        assert!(!card.is_flipped());
    }
}
