use gtk4::{Window, glib::object::ObjectExt};
use gtk4_layer_shell::{Edge, Layer, LayerShell};

use crate::ui::ChimeUi;

impl ChimeUi {
    pub fn window(&mut self) -> Window {
        let win = Window::builder().build();

        win.init_layer_shell();
        win.set_layer(Layer::Top);
        win.set_anchor(Edge::Top, true);
        win.set_anchor(Edge::Left, true);
        win.set_anchor(Edge::Right, true);
        win.auto_exclusive_zone_enable();

        self.window = win.downgrade();
        win
    }
}
