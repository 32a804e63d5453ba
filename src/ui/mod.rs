use gtk4::glib::WeakRef;

pub mod widgets;
mod window;

#[derive(Default)]
pub struct ChimeUi {
    pub window: WeakRef<gtk4::Window>,
}
