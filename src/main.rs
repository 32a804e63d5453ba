use chime::config::load_config;
use chime::errors::ChimeError;
use chime::ui::ChimeUi;
use chime::ui::widgets::Clock;
use gtk4::prelude::GtkWindowExt;

fn main() -> Result<(), ChimeError> {
    colog::init();
    gtk4::init().expect("Failed to init GTK");
    let main_loop = gtk4::glib::MainLoop::new(None, false);

    let config = load_config()?;

    let mut ui = ChimeUi::default();
    let win = ui.window();

    let bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
    let _clock = Clock::builder(&config).for_box(&bar).build();
    win.set_child(Some(&bar));

    win.connect_close_request({
        let main_loop = main_loop.clone();
        move |_| {
            main_loop.quit();
            gtk4::glib::Propagation::Stop
        }
    });

    win.present();
    main_loop.run();

    Ok(())
}
