use crate::config::CarouselConfig;
use folio::carousel::{Carousel, CarouselAction, CarouselMsg, Viewport};
use folio::catalog::Testimonial;

// The deck is never laid out spatially; a ring-sized viewport keeps navigation wrapping.
const DECK_VIEWPORT: Viewport = Viewport { width: f64::MAX };

/// One testimonial at a time, cycling on a timer until the visitor navigates.
pub struct TestimonialDeck {
    items: Vec<Testimonial>,
    carousel: Carousel,
}

impl TestimonialDeck {
    pub fn new(config: &CarouselConfig<Testimonial>) -> Self {
        Self {
            carousel: Carousel::new(config.items.len(), config.policy, DECK_VIEWPORT),
            items: config.items.clone(),
        }
    }

    pub fn update(&mut self, msg: CarouselMsg) -> CarouselAction {
        self.carousel.update(msg)
    }

    pub fn reload(&mut self, items: &[Testimonial]) {
        self.items = items.to_vec();
        self.carousel.set_len(self.items.len());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.carousel.active_index())
    }

    pub fn quote(&self) -> String {
        self.current()
            .map(|t| format!("\u{201c}{}\u{201d}", t.content))
            .unwrap_or_default()
    }

    pub fn byline(&self) -> String {
        self.current().map(Testimonial::byline).unwrap_or_default()
    }

    pub fn stars(&self) -> String {
        self.current().map(Testimonial::stars).unwrap_or_default()
    }

    pub fn project(&self) -> String {
        self.current()
            .filter(|t| !t.project.is_empty())
            .map(|t| format!("Project: {}", t.project))
            .unwrap_or_default()
    }

    /// "2 / 5", or empty when there is nothing to show.
    pub fn position(&self) -> String {
        if self.carousel.is_empty() {
            String::new()
        } else {
            format!(
                "{} / {}",
                self.carousel.active_index() + 1,
                self.carousel.len()
            )
        }
    }
}
