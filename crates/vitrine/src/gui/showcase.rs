use crate::config::CarouselConfig;
use crate::gui::painter;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use folio::carousel::{
    self, CardTransform, Carousel, CarouselAction, CarouselMsg, DragTracker, Viewport,
};
use folio::catalog::TechnologyItem;
use folio::geometry::{Point, Size};
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use std::time::Instant;

pub const ICON_SIZE: i32 = 64;
const CARD_RADIUS: f64 = 16.0;
const CARD_PADDING: f64 = 20.0;
const BAR_HEIGHT: f64 = 6.0;

pub struct TechCard {
    pub item: TechnologyItem,
    pub pixbuf: Option<Pixbuf>,
}

impl TechCard {
    pub fn load(item: TechnologyItem) -> Self {
        let pixbuf = item.icon.as_ref().and_then(|path| {
            Pixbuf::from_file_at_scale(path, ICON_SIZE, ICON_SIZE, true)
                .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
                .ok()
        });
        Self { item, pixbuf }
    }
}

/// Technology carousel: cards, their layout state and the drag in progress.
pub struct TechShowcase {
    cards: Vec<TechCard>,
    carousel: Carousel,
    tracker: DragTracker,
    drag_origin: Option<Instant>,
}

impl TechShowcase {
    pub fn new(config: &CarouselConfig<TechnologyItem>, viewport: Viewport) -> Self {
        let cards: Vec<TechCard> = config.items.iter().cloned().map(TechCard::load).collect();
        Self {
            carousel: Carousel::new(cards.len(), config.policy, viewport),
            cards,
            tracker: DragTracker::new(),
            drag_origin: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn active_item(&self) -> Option<&TechnologyItem> {
        self.cards
            .get(self.carousel.active_index())
            .map(|card| &card.item)
    }

    pub fn reload(&mut self, items: &[TechnologyItem]) {
        self.cards = items.iter().cloned().map(TechCard::load).collect();
        self.carousel.set_len(self.cards.len());
    }

    pub fn update(&mut self, msg: CarouselMsg) -> CarouselAction {
        self.carousel.update(msg)
    }

    /// `width` is the window width, not the padded carousel area.
    pub fn resize(&mut self, width: i32) -> CarouselAction {
        self.update(CarouselMsg::Resize(Viewport::new(f64::from(width))))
    }

    fn elapsed(&self) -> f64 {
        self.drag_origin
            .map(|origin| origin.elapsed().as_secs_f64())
            .unwrap_or_default()
    }

    pub fn drag_begin(&mut self) -> CarouselAction {
        self.drag_origin = Some(Instant::now());
        self.tracker.begin(0.0);
        self.update(CarouselMsg::DragStart)
    }

    pub fn drag_update(&mut self, offset: f64) -> CarouselAction {
        self.tracker.sample(self.elapsed(), offset);
        self.update(CarouselMsg::DragMove(offset))
    }

    pub fn drag_end(&mut self, offset: f64) -> CarouselAction {
        let release = self.tracker.release(self.elapsed(), offset);
        self.drag_origin = None;
        self.update(CarouselMsg::DragEnd(release))
    }

    /// Selects the card under `point` (surface coordinates).
    pub fn click(&mut self, point: Point, surface: Size) -> CarouselAction {
        let center = surface.center();
        let local = Point::new(point.x - center.x, point.y - center.y);
        let card = carousel::card_size(self.carousel.mode(), self.carousel.viewport());

        match carousel::hit_test(&self.carousel.layout(), card, local) {
            Some(index) if index != self.carousel.active_index() => {
                self.update(CarouselMsg::Select(index))
            }
            _ => CarouselAction::default(),
        }
    }

    pub fn draw(&self, cr: &Context, surface: Size, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let card = carousel::card_size(self.carousel.mode(), self.carousel.viewport());
        let mut transforms = self.carousel.layout();
        // back to front
        transforms.sort_by_key(|t| t.z_index);

        for transform in &transforms {
            if let Some(tech) = self.cards.get(transform.index) {
                CardRenderer::new(tech, transform, card, surface.center()).draw(cr, colors)?;
            }
        }
        Ok(())
    }
}

struct CardRenderer<'a> {
    card: &'a TechCard,
    transform: &'a CardTransform,
    size: Size,
    origin: Point,
}

impl<'a> CardRenderer<'a> {
    fn new(card: &'a TechCard, transform: &'a CardTransform, size: Size, origin: Point) -> Self {
        Self {
            card,
            transform,
            size,
            origin,
        }
    }

    fn left(&self) -> f64 {
        -self.size.width / 2.0
    }

    fn top(&self) -> f64 {
        -self.size.height / 2.0
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.translate(
            self.origin.x + self.transform.offset.x,
            self.origin.y + self.transform.offset.y,
        );
        cr.scale(self.transform.scale, self.transform.scale);

        cr.push_group();
        self.draw_background(cr, colors)?;
        self.draw_content(cr, colors)?;
        self.draw_dimming(cr)?;
        cr.pop_group_to_source()?;
        cr.paint_with_alpha(self.transform.opacity)?;

        cr.restore()
    }

    fn draw_background(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        painter::rounded_rect(
            cr,
            self.left(),
            self.top(),
            self.size.width,
            self.size.height,
            CARD_RADIUS,
        );
        painter::set_color(cr, colors.card);
        cr.fill_preserve()?;
        let border = if self.transform.active {
            colors.accent
        } else {
            colors.card_border
        };
        painter::set_color(cr, border);
        cr.set_line_width(1.5);
        cr.stroke()
    }

    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let item = &self.card.item;
        let icon_center = Point::new(0.0, self.top() + CARD_PADDING + ICON_SIZE as f64 / 2.0);
        match &self.card.pixbuf {
            Some(pixbuf) => self.draw_icon(cr, pixbuf, icon_center)?,
            None => self.draw_monogram(cr, colors, icon_center)?,
        }

        let mut y = icon_center.y + ICON_SIZE as f64 / 2.0 + 32.0;
        painter::set_color(cr, colors.text);
        painter::centered_text(cr, Point::new(0.0, y), item.name.as_str(), 18.0, cairo::FontWeight::Bold)?;

        y += 24.0;
        painter::set_color(cr, colors.accent);
        painter::centered_text(
            cr,
            Point::new(0.0, y),
            &item.proficiency.to_string(),
            13.0,
            cairo::FontWeight::Normal,
        )?;

        y += 22.0;
        self.draw_bar(cr, colors, y, item.years.fill())?;

        y += BAR_HEIGHT + 20.0;
        painter::set_color(cr, colors.muted);
        painter::centered_text(
            cr,
            Point::new(0.0, y),
            &item.years.caption(),
            11.0,
            cairo::FontWeight::Normal,
        )
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf, center: Point) -> Result<(), cairo::Error> {
        let (iw, ih) = (pixbuf.width() as f64, pixbuf.height() as f64);
        cr.save()?;
        cr.set_source_pixbuf(pixbuf, center.x - iw / 2.0, center.y - ih / 2.0);
        cr.paint()?;
        cr.restore()
    }

    fn draw_monogram(&self, cr: &Context, colors: &ThemeColors, center: Point) -> Result<(), cairo::Error> {
        let radius = ICON_SIZE as f64 / 2.0;
        let mut tint = colors.accent;
        tint.alpha = 0.2;
        cr.new_path();
        cr.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        painter::set_color(cr, tint);
        cr.fill()?;

        let initial: String = self.card.item.name.chars().take(2).collect();
        painter::set_color(cr, colors.accent);
        painter::centered_text(
            cr,
            Point::new(center.x, center.y + 8.0),
            &initial,
            22.0,
            cairo::FontWeight::Bold,
        )
    }

    fn draw_bar(&self, cr: &Context, colors: &ThemeColors, y: f64, fill: f64) -> Result<(), cairo::Error> {
        let width = self.size.width - 2.0 * CARD_PADDING;
        let x = self.left() + CARD_PADDING;

        painter::rounded_rect(cr, x, y, width, BAR_HEIGHT, BAR_HEIGHT / 2.0);
        painter::set_color(cr, colors.track);
        cr.fill()?;

        painter::rounded_rect(cr, x, y, width * fill, BAR_HEIGHT, BAR_HEIGHT / 2.0);
        painter::set_color(cr, colors.accent);
        cr.fill()
    }

    /// Brightness below 1.0 is a black wash over the card.
    fn draw_dimming(&self, cr: &Context) -> Result<(), cairo::Error> {
        let shade = 1.0 - self.transform.brightness;
        if shade <= 0.0 {
            return Ok(());
        }
        painter::rounded_rect(
            cr,
            self.left(),
            self.top(),
            self.size.width,
            self.size.height,
            CARD_RADIUS,
        );
        cr.set_source_rgba(0.0, 0.0, 0.0, shade);
        cr.fill()
    }
}
