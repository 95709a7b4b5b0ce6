use backend::{image_info, logging, DemoConfig, System, IMAGE_PROBE_PATH};

fn main() {
    let config = DemoConfig::new();
    logging::init(config.log_level);

    let info = image_info::load_image_info(IMAGE_PROBE_PATH);
    println!("{info}");

    let mut system = match System::new(&config.window) {
        Ok(s) => s,
        Err(msg) => panic!("Window initialization failure: {msg}"),
    };
    backend::run_frame_loop(&mut system, &config);
}
