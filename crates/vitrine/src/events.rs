use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CarouselId {
    Technologies,
    Testimonials,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Tick(CarouselId),
    ConfigReload,
}
