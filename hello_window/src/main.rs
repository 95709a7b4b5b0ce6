use backend::{logging, DemoConfig, System};

fn main() {
    let config = DemoConfig::new();
    logging::init(config.log_level);

    let mut system = match System::new(&config.window) {
        Ok(s) => s,
        Err(msg) => panic!("Window initialization failure: {msg}"),
    };
    backend::run_frame_loop(&mut system, &config);
}
