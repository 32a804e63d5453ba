use std::{cell::RefCell, rc::Rc};

use log::warn;

use gtk4::{
    Box, EventControllerMotion, EventControllerScroll, EventControllerScrollFlags, Label,
    glib::object::ObjectExt,
    prelude::{BoxExt, WidgetExt},
};

use crate::{
    config::ClockConfig,
    ticker,
    ui::widgets::{
        Clock,
        clock::{context::ClockContext, exec, types::ScrollDirection},
    },
};

pub struct ClockBuilder {
    label: Label,
    context: Rc<RefCell<ClockContext>>,
    scroll_up_cmd: Option<String>,
    scroll_down_cmd: Option<String>,
}

impl ClockBuilder {
    pub fn new(config: &ClockConfig) -> Self {
        let label = Label::builder()
            .css_classes(["widget", "clock"])
            .build();

        Self {
            label,
            context: Rc::new(RefCell::new(ClockContext::new(config))),
            scroll_up_cmd: config.on_scroll_up.clone(),
            scroll_down_cmd: config.on_scroll_down.clone(),
        }
    }

    fn refresh(label: &Label, context: &mut ClockContext) {
        let output = context.render();
        label.set_markup(&output.label);
        if let Some(tooltip) = output.tooltip {
            label.set_tooltip_markup(Some(&tooltip));
        }
    }

    fn connect_scroll(&self) {
        let controller = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
        controller.connect_scroll({
            let label = self.label.downgrade();
            let context = Rc::clone(&self.context);
            let up_cmd = self.scroll_up_cmd.clone();
            let down_cmd = self.scroll_down_cmd.clone();
            move |_controller, _dx, dy| {
                let direction = if dy < 0.0 {
                    ScrollDirection::Up
                } else if dy > 0.0 {
                    ScrollDirection::Down
                } else {
                    return gtk4::glib::Propagation::Proceed;
                };

                // Configured scroll commands take the event over entirely.
                if up_cmd.is_some() || down_cmd.is_some() {
                    let cmd = match direction {
                        ScrollDirection::Up => up_cmd.as_deref(),
                        ScrollDirection::Down => down_cmd.as_deref(),
                    };
                    if let Some(cmd) = cmd {
                        if let Err(e) = exec::spawn_detached(cmd) {
                            warn!("failed to run scroll command {cmd:?}: {e:?}");
                        }
                    }
                    return gtk4::glib::Propagation::Stop;
                }

                if context.borrow_mut().handle_scroll(direction) {
                    if let Some(label) = label.upgrade() {
                        Self::refresh(&label, &mut context.borrow_mut());
                    }
                }
                gtk4::glib::Propagation::Stop
            }
        });
        self.label.add_controller(controller);
    }

    fn connect_leave(&self) {
        let controller = EventControllerMotion::new();
        controller.connect_leave({
            let label = self.label.downgrade();
            let context = Rc::clone(&self.context);
            move |_controller| {
                if context.borrow_mut().pointer_left() {
                    if let Some(label) = label.upgrade() {
                        Self::refresh(&label, &mut context.borrow_mut());
                    }
                }
            }
        });
        self.label.add_controller(controller);
    }

    /// Redraw on every aligned interval tick. The receive loop ends when
    /// the label is gone, which in turn stops the timer thread.
    fn connect_ticker(&self) {
        let ticks = ticker::spawn(self.context.borrow().interval());
        gtk4::glib::MainContext::default().spawn_local({
            let label = self.label.downgrade();
            let context = Rc::clone(&self.context);
            async move {
                while ticks.recv().await.is_ok() {
                    let Some(label) = label.upgrade() else { break };
                    Self::refresh(&label, &mut context.borrow_mut());
                }
            }
        });
    }

    pub fn for_box(self, container: &Box) -> Self {
        container.append(&self.label);
        self
    }

    pub fn build(self) -> Clock {
        Self::refresh(&self.label, &mut self.context.borrow_mut());

        self.connect_scroll();
        self.connect_leave();
        self.connect_ticker();

        Clock {
            label: self.label.downgrade(),
        }
    }
}
