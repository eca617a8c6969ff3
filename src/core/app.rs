use crate::config::ReviewConfig;
use crate::core::startup::Startup;
use crate::domain::AnnotationSet;
use crate::review::brief::ReviewBrief;
use crate::review::report::{JsonReport, LogSink, ReviewSink};
use crate::session::messages;
use crate::session::shortcuts::is_dialog_chord;
use crate::session::state::ReviewOverlay;
use crate::widget::feedback_dialog::DRAFT_INPUT_ID;
use crate::widget::viewer;
use cosmic::iced::{event, keyboard, window};
use cosmic::widget::image;
use cosmic::{app, iced_futures::event::listen_with};

pub(crate) fn run(startup: Startup) -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            startup.config.frame_width + 160.0,
            startup.config.frame_height + 280.0,
        ))
        .exit_on_close(false);
    cosmic::app::run::<App>(settings, startup)
}

pub struct App {
    pub core: app::Core,
    pub overlay: ReviewOverlay,
    pub config: ReviewConfig,
    /// Device frame drawn behind the screen, if configured
    pub bezel: Option<image::Handle>,
    pub brief: Option<ReviewBrief>,
}

#[derive(Debug, Clone)]
pub enum Msg {
    Session(messages::Msg),
    Keyboard(keyboard::Event),
}

impl App {
    /// Hand the collected feedback to every configured sink
    fn deliver(&self, feedback: &AnnotationSet) {
        let mut sinks: Vec<Box<dyn ReviewSink>> = vec![Box::new(LogSink)];
        if let Some(path) = &self.config.report_path {
            let images = self
                .overlay
                .screens()
                .iter()
                .map(|s| s.image.path.clone())
                .collect();
            let product = self.brief.as_ref().map(|b| b.product_name.clone());
            sinks.push(Box::new(JsonReport::new(path.clone(), product, images)));
        }

        for sink in &mut sinks {
            if let Err(err) = sink.deliver(feedback) {
                log::error!("Failed to deliver feedback: {err:#}");
            }
        }
    }
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = Startup;

    type Message = Msg;

    const APP_ID: &'static str = "io.github.screenreview";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let Startup {
            config,
            overlay,
            brief,
            bezel,
        } = flags;
        (
            Self {
                core,
                overlay,
                config,
                bezel,
                brief,
            },
            cosmic::iced::Task::none(),
        )
    }

    fn on_close_requested(&self, _id: window::Id) -> Option<Self::Message> {
        Some(Msg::Session(messages::Msg::finish()))
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        viewer::build_view(
            &self.overlay,
            &self.config,
            self.bezel.as_ref(),
            self.brief.as_ref().map(|b| b.product_name.as_str()),
        )
        .map(Msg::Session)
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if let Some(msg) =
                    crate::session::shortcuts::handle_key_event(&self.overlay, key, modifiers)
                {
                    return self.update(Msg::Session(msg));
                }
                cosmic::iced::Task::none()
            }
            Msg::Keyboard(_) => cosmic::iced::Task::none(),
            Msg::Session(msg) => {
                let opens_dialog = msg.opens_dialog();
                match crate::session::update::update(&mut self.overlay, msg) {
                    Some(feedback) => {
                        self.deliver(&feedback);
                        cosmic::iced::exit()
                    }
                    None if opens_dialog && self.overlay.dialog_anchor().is_some() => {
                        cosmic::widget::text_input::focus(DRAFT_INPUT_ID.clone())
                    }
                    None => cosmic::iced::Task::none(),
                }
            }
        }
    }

    fn subscription(&self) -> cosmic::iced_futures::Subscription<Self::Message> {
        // Keys consumed by the text field only reach the shortcuts as dialog chords
        listen_with(|e, status, _| {
            let cosmic::iced_core::Event::Keyboard(keyboard_event) = e else {
                return None;
            };
            let forward = status == event::Status::Ignored
                || matches!(
                    &keyboard_event,
                    keyboard::Event::KeyPressed { key, modifiers, .. }
                        if is_dialog_chord(key, *modifiers)
                );
            forward.then_some(Msg::Keyboard(keyboard_event))
        })
    }
}
