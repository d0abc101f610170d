use crate::config::{self, Config};
use crate::events::{AppEvent, CarouselId};
use crate::gui::contact::ContactForm;
use crate::gui::projects::ProjectGallery;
use crate::gui::radar::RadarView;
use crate::gui::reveal::{RevealOnce, Span};
use crate::gui::scene::SceneView;
use crate::gui::showcase::TechShowcase;
use crate::gui::testimonials::TestimonialDeck;
use crate::gui::theme::{self, ThemeColors};
use crate::sys::runtime;
use folio::carousel::{CarouselAction, CarouselMsg, Viewport};
use folio::catalog::{Project, ProjectFilter};
use folio::contact::ContactField;
use folio::geometry::{Point, Size};
use folio::schedule::{CancellationToken, FrameOutcome};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tokio::runtime::Handle;

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 900;
const SHOWCASE_HEIGHT: i32 = 640;

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    pub tx: async_channel::Sender<AppEvent>,
    pub rx: async_channel::Receiver<AppEvent>,
    pub handle: Handle,
}

pub struct AppModel {
    radar: Rc<RefCell<RadarView>>,
    showcase: Rc<RefCell<TechShowcase>>,
    scene: Rc<RefCell<SceneView>>,
    deck: TestimonialDeck,
    gallery: ProjectGallery,
    contact: ContactForm,
    caption: String,
    config_path: PathBuf,
    tx: async_channel::Sender<AppEvent>,
    handle: Handle,
    token: CancellationToken,
    technologies_interval: Duration,
    radar_reveal: RevealOnce,
    showcase_reveal: RevealOnce,
    scroller: gtk::ScrolledWindow,
    content: gtk::Box,
    radar_area: gtk::DrawingArea,
    showcase_area: gtk::DrawingArea,
    dots: gtk::Box,
    dot_buttons: Vec<gtk::Button>,
    projects_box: gtk::Box,
}

#[derive(Debug)]
pub enum AppMsg {
    Tick(CarouselId),
    Showcase(CarouselMsg),
    Testimonials(CarouselMsg),
    ShowcaseClick(Point),
    DragBegin,
    DragUpdate(f64),
    DragEnd(f64),
    Scrolled,
    FilterProjects(ProjectFilter),
    PointerMove(Point),
    SceneResize(i32, i32),
    ContactEdit(ContactField, String),
    ContactProject(u32),
    ContactSubmit,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Tick(id) => AppMsg::Tick(id),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn clear_box(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

fn project_card(project: &Project) -> gtk::Box {
    let card = gtk::Box::new(gtk::Orientation::Vertical, 4);
    card.add_css_class("vitrine-project");

    let heading = gtk::Label::new(Some(&ProjectGallery::heading(project)));
    heading.add_css_class("vitrine-project-title");
    let subtitle = gtk::Label::new(Some(&project.subtitle));
    subtitle.add_css_class("dim-label");
    let description = gtk::Label::new(Some(&project.description));
    description.set_wrap(true);
    let stack = gtk::Label::new(Some(&format!(
        "{} · {}",
        project.category.label(),
        project.stack()
    )));
    stack.add_css_class("vitrine-project-stack");

    for label in [&heading, &subtitle, &description, &stack] {
        label.set_xalign(0.0);
        card.append(label);
    }
    card
}

/// Runs `step` once per frame of `widget` until it stops.
fn drive_frames<W: IsA<gtk::Widget>>(widget: &W, step: impl Fn() -> FrameOutcome + 'static) {
    widget.add_tick_callback(move |widget, _| {
        let outcome = step();
        widget.queue_draw();
        match outcome {
            FrameOutcome::Continue => glib::ControlFlow::Continue,
            FrameOutcome::Stop => glib::ControlFlow::Break,
        }
    });
}

impl AppModel {
    fn caption(showcase: &TechShowcase) -> String {
        showcase
            .active_item()
            .map(|item| format!("{} · {}", item.name, item.proficiency))
            .unwrap_or_default()
    }

    fn apply_testimonials(&mut self, msg: CarouselMsg) {
        if self.deck.update(msg).index_changed {
            self.refresh_dots();
        }
    }

    fn rebuild_dots(&mut self, sender: &ComponentSender<Self>) {
        clear_box(&self.dots);
        let mut buttons = Vec::with_capacity(self.deck.len());
        for index in 0..self.deck.len() {
            let dot = gtk::Button::with_label("●");
            dot.add_css_class("flat");
            dot.add_css_class("vitrine-dot");
            dot.set_tooltip_text(Some(&format!("Testimonial {}", index + 1)));
            let sender = sender.clone();
            dot.connect_clicked(move |_| {
                sender.input(AppMsg::Testimonials(CarouselMsg::Select(index)));
            });
            self.dots.append(&dot);
            buttons.push(dot);
        }
        self.dot_buttons = buttons;
        self.refresh_dots();
    }

    fn refresh_dots(&self) {
        let active = self.deck.active_index();
        for (index, dot) in self.dot_buttons.iter().enumerate() {
            if index == active {
                dot.add_css_class("vitrine-dot-active");
            } else {
                dot.remove_css_class("vitrine-dot-active");
            }
        }
    }

    fn rebuild_projects(&self) {
        clear_box(&self.projects_box);
        for project in self.gallery.visible() {
            self.projects_box.append(&project_card(project));
        }
    }

    /// Section position inside the scrolled content.
    fn section_span(&self, area: &gtk::DrawingArea) -> Option<Span> {
        let origin = area.compute_point(&self.content, &gtk::graphene::Point::new(0.0, 0.0))?;
        Some(Span::new(f64::from(origin.y()), f64::from(area.height())))
    }

    fn reveal_sections(&mut self) {
        let adjustment = self.scroller.vadjustment();
        let view = Span::new(adjustment.value(), adjustment.page_size());

        if let Some(span) = self.section_span(&self.radar_area)
            && self.radar_reveal.check(span, view)
            && self.radar.borrow_mut().trigger()
        {
            log::debug!("Radar animation started");
            let radar = self.radar.clone();
            drive_frames(&self.radar_area, move || radar.borrow_mut().frame());
        }

        if let Some(span) = self.section_span(&self.showcase_area)
            && self.showcase_reveal.check(span, view)
        {
            log::debug!("Technology ticker started");
            runtime::spawn_ticker(
                &self.handle,
                CarouselId::Technologies,
                self.technologies_interval,
                self.tx.clone(),
                self.token.clone(),
            );
        }
    }

    fn apply_showcase(&mut self, action: CarouselAction) {
        if action.index_changed {
            self.caption = Self::caption(&self.showcase.borrow());
        }
        if action.should_redraw {
            self.showcase_area.queue_draw();
        }
    }

    fn reload(&mut self, config: Config, sender: &ComponentSender<Self>) {
        self.radar.borrow_mut().reload(&config.radar);
        self.showcase
            .borrow_mut()
            .reload(&config.technologies.items);
        self.deck.reload(&config.testimonials.items);
        self.gallery.reload(config.projects);
        self.caption = Self::caption(&self.showcase.borrow());
        self.rebuild_dots(sender);
        self.rebuild_projects();
        self.radar_area.queue_draw();
        self.showcase_area.queue_draw();
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Vitrine"),
            set_default_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
            add_css_class: "vitrine-window",

            gtk::Overlay {
                #[name = "scene_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "vitrine-scene",
                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::SceneResize(width, height));
                    },
                },

                #[name = "scroller"]
                add_overlay = &gtk::ScrolledWindow {
                    set_hscrollbar_policy: gtk::PolicyType::Never,
                    add_css_class: "vitrine-content",

                    add_controller = gtk::EventControllerMotion {
                        connect_motion[sender] => move |_, x, y| {
                            sender.input(AppMsg::PointerMove(Point::new(x, y)));
                        }
                    },

                    #[name = "content"]
                    #[wrap(Some)]
                    set_child = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 24,
                        set_margin_all: 32,

                        gtk::Label {
                            set_label: "Skills",
                            add_css_class: "vitrine-heading",
                        },

                        #[name = "radar_area"]
                        gtk::DrawingArea {
                            set_halign: gtk::Align::Center,
                            set_content_width: radar_size,
                            set_content_height: radar_size,
                        },

                        gtk::Label {
                            set_label: "Technologies",
                            add_css_class: "vitrine-heading",
                        },

                        #[name = "showcase_area"]
                        gtk::DrawingArea {
                            set_hexpand: true,
                            set_content_height: SHOWCASE_HEIGHT,

                            add_controller = gtk::GestureClick {
                                connect_released[sender] => move |_, _, x, y| {
                                    sender.input(AppMsg::ShowcaseClick(Point::new(x, y)));
                                }
                            },

                            add_controller = gtk::GestureDrag {
                                connect_drag_begin[sender] => move |_, _, _| {
                                    sender.input(AppMsg::DragBegin);
                                },
                                connect_drag_update[sender] => move |_, dx, _| {
                                    sender.input(AppMsg::DragUpdate(dx));
                                },
                                connect_drag_end[sender] => move |_, dx, _| {
                                    sender.input(AppMsg::DragEnd(dx));
                                },
                            },
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_halign: gtk::Align::Center,
                            set_spacing: 12,

                            gtk::Button {
                                set_label: "‹",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Showcase(CarouselMsg::Previous));
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.caption,
                            },
                            gtk::Button {
                                set_label: "›",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Showcase(CarouselMsg::Next));
                                },
                            },
                        },

                        gtk::Label {
                            set_label: "Projects",
                            add_css_class: "vitrine-heading",
                        },

                        #[name = "filters"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_halign: gtk::Align::Center,
                            add_css_class: "linked",
                        },

                        #[name = "projects_box"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_halign: gtk::Align::Center,
                            set_width_request: 640,
                            set_spacing: 12,
                        },

                        gtk::Label {
                            set_label: "Testimonials",
                            add_css_class: "vitrine-heading",
                        },

                        gtk::Label {
                            #[watch]
                            set_label: &model.deck.quote(),
                            set_wrap: true,
                            set_max_width_chars: 60,
                            set_justify: gtk::Justification::Center,
                            add_css_class: "vitrine-quote",
                        },
                        gtk::Label {
                            #[watch]
                            set_label: &model.deck.stars(),
                            add_css_class: "vitrine-stars",
                        },
                        gtk::Label {
                            #[watch]
                            set_label: &model.deck.byline(),
                        },
                        gtk::Label {
                            #[watch]
                            set_label: &model.deck.project(),
                            add_css_class: "dim-label",
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_halign: gtk::Align::Center,
                            set_spacing: 12,

                            gtk::Button {
                                set_label: "‹",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Testimonials(CarouselMsg::Previous));
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.deck.position(),
                            },
                            gtk::Button {
                                set_label: "›",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Testimonials(CarouselMsg::Next));
                                },
                            },
                        },

                        #[name = "dots"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            set_halign: gtk::Align::Center,
                            set_spacing: 4,
                        },

                        gtk::Label {
                            set_label: "Contact",
                            add_css_class: "vitrine-heading",
                        },

                        gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_halign: gtk::Align::Center,
                            set_width_request: 420,
                            set_spacing: 6,

                            gtk::Entry {
                                set_placeholder_text: Some("Name"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppMsg::ContactEdit(ContactField::Name, entry.text().into()));
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.contact.error(ContactField::Name),
                                set_xalign: 0.0,
                                add_css_class: "vitrine-error",
                            },

                            gtk::Entry {
                                set_placeholder_text: Some("Email"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppMsg::ContactEdit(ContactField::Email, entry.text().into()));
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.contact.error(ContactField::Email),
                                set_xalign: 0.0,
                                add_css_class: "vitrine-error",
                            },

                            gtk::Entry {
                                set_placeholder_text: Some("Company (optional)"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppMsg::ContactEdit(ContactField::Company, entry.text().into()));
                                },
                            },

                            gtk::Entry {
                                set_placeholder_text: Some("Budget (optional)"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppMsg::ContactEdit(ContactField::Budget, entry.text().into()));
                                },
                            },

                            gtk::DropDown::from_strings(&project_labels) {
                                connect_selected_notify[sender] => move |dropdown| {
                                    sender.input(AppMsg::ContactProject(dropdown.selected()));
                                },
                            },

                            gtk::Entry {
                                set_placeholder_text: Some("Message"),
                                connect_changed[sender] => move |entry| {
                                    sender.input(AppMsg::ContactEdit(ContactField::Message, entry.text().into()));
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.contact.error(ContactField::Message),
                                set_xalign: 0.0,
                                add_css_class: "vitrine-error",
                            },

                            gtk::Button {
                                set_label: "Send message",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::ContactSubmit);
                                },
                            },
                            gtk::Label {
                                #[watch]
                                set_label: &model.contact.status(),
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            tx,
            rx,
            handle,
        } = init;

        theme::load_css();

        let token = CancellationToken::new();
        let radar = RadarView::new(&config.radar, token.clone());
        let radar_size = radar.size();
        let showcase = TechShowcase::new(&config.technologies, Viewport::new(f64::from(WINDOW_WIDTH)));
        let scene = SceneView::new(
            Size::new(f64::from(WINDOW_WIDTH), f64::from(WINDOW_HEIGHT)),
            token.clone(),
        );
        let labels = ContactForm::project_labels();
        let project_labels: Vec<&str> = labels.iter().map(String::as_str).collect();

        let model = AppModel {
            caption: Self::caption(&showcase),
            radar: Rc::new(RefCell::new(radar)),
            showcase: Rc::new(RefCell::new(showcase)),
            scene: Rc::new(RefCell::new(scene)),
            deck: TestimonialDeck::new(&config.testimonials),
            gallery: ProjectGallery::new(config.projects.clone()),
            contact: ContactForm::default(),
            config_path,
            tx: tx.clone(),
            handle: handle.clone(),
            token: token.clone(),
            technologies_interval: config.technologies.interval(),
            radar_reveal: RevealOnce::default(),
            showcase_reveal: RevealOnce::default(),
            scroller: gtk::ScrolledWindow::default(),
            content: gtk::Box::default(),
            radar_area: gtk::DrawingArea::default(),
            showcase_area: gtk::DrawingArea::default(),
            dots: gtk::Box::default(),
            dot_buttons: Vec::new(),
            projects_box: gtk::Box::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.scroller = widgets.scroller.clone();
        model.content = widgets.content.clone();
        model.radar_area = widgets.radar_area.clone();
        model.showcase_area = widgets.showcase_area.clone();
        model.dots = widgets.dots.clone();
        model.projects_box = widgets.projects_box.clone();
        model.rebuild_dots(&sender);
        model.rebuild_projects();

        let mut group: Option<gtk::ToggleButton> = None;
        for choice in ProjectFilter::choices() {
            let tab = gtk::ToggleButton::with_label(choice.label());
            tab.set_group(group.as_ref());
            tab.set_active(choice == model.gallery.filter());
            let sender = sender.clone();
            tab.connect_toggled(move |tab| {
                if tab.is_active() {
                    sender.input(AppMsg::FilterProjects(choice));
                }
            });
            widgets.filters.append(&tab);
            group.get_or_insert(tab);
        }

        // `changed` fires on every allocation, which covers the initial position.
        let vadjustment = widgets.scroller.vadjustment();
        let scrolled = sender.clone();
        vadjustment.connect_value_changed(move |_| scrolled.input(AppMsg::Scrolled));
        let resized = sender.clone();
        vadjustment.connect_changed(move |_| resized.input(AppMsg::Scrolled));

        let radar_draw = model.radar.clone();
        widgets.radar_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = radar_draw.borrow().draw(cr) {
                log::error!("Radar drawing error: {}", e);
            }
        });

        let showcase_draw = model.showcase.clone();
        widgets
            .showcase_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                let surface = Size::new(f64::from(width), f64::from(height));
                if let Err(e) = showcase_draw.borrow().draw(cr, surface, &colors) {
                    log::error!("Showcase drawing error: {}", e);
                }
            });

        let scene_draw = model.scene.clone();
        widgets.scene_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = scene_draw.borrow().draw(cr) {
                log::error!("Scene drawing error: {}", e);
            }
        });

        let scene_frames = model.scene.clone();
        drive_frames(&widgets.scene_area, move || scene_frames.borrow_mut().frame());

        runtime::spawn_ticker(
            &handle,
            CarouselId::Testimonials,
            config.testimonials.interval(),
            tx,
            token,
        );

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tick(CarouselId::Technologies) => {
                let action = self.showcase.borrow_mut().update(CarouselMsg::Tick);
                self.apply_showcase(action);
            }
            AppMsg::Tick(CarouselId::Testimonials) => {
                self.apply_testimonials(CarouselMsg::Tick);
            }
            AppMsg::Showcase(msg) => {
                let action = self.showcase.borrow_mut().update(msg);
                self.apply_showcase(action);
            }
            AppMsg::Testimonials(msg) => {
                self.apply_testimonials(msg);
            }
            AppMsg::ShowcaseClick(point) => {
                let surface = Size::new(
                    f64::from(self.showcase_area.width()),
                    f64::from(self.showcase_area.height()),
                );
                let action = self.showcase.borrow_mut().click(point, surface);
                self.apply_showcase(action);
            }
            AppMsg::DragBegin => {
                let action = self.showcase.borrow_mut().drag_begin();
                self.apply_showcase(action);
            }
            AppMsg::DragUpdate(offset) => {
                let action = self.showcase.borrow_mut().drag_update(offset);
                self.apply_showcase(action);
            }
            AppMsg::DragEnd(offset) => {
                let action = self.showcase.borrow_mut().drag_end(offset);
                self.apply_showcase(action);
            }
            AppMsg::Scrolled => self.reveal_sections(),
            AppMsg::FilterProjects(filter) => {
                if self.gallery.set_filter(filter) {
                    self.rebuild_projects();
                }
            }
            AppMsg::PointerMove(point) => {
                self.scene.borrow_mut().pointer_moved(point);
            }
            AppMsg::SceneResize(width, height) => {
                self.scene.borrow_mut().resize(width, height);
                let action = self.showcase.borrow_mut().resize(width);
                self.apply_showcase(action);
            }
            AppMsg::ContactEdit(field, value) => {
                self.contact.edit(field, value);
            }
            AppMsg::ContactProject(index) => {
                self.contact.set_project(index);
            }
            AppMsg::ContactSubmit => {
                self.contact.submit();
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.reload(new_config, &sender);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        self.token.cancel();
        self.showcase.borrow_mut().update(CarouselMsg::Teardown);
        self.deck.update(CarouselMsg::Teardown);
        log::debug!("Views torn down");
    }
}
