pub struct Lumen {
    app_name: String,
}

static LUMEN_STATIC: std::sync::OnceLock<LumenStatic> = std::sync::OnceLock::new();

struct LumenStatic {}

impl LumenStatic {
    fn init(app_name: &str) -> &'static Self {
        LUMEN_STATIC.get_or_init(|| {
            env_logger::builder()
                .filter_level(log::LevelFilter::Info)
                .parse_default_env()
                .init();

            log::debug!("Initialized {}.", app_name);
            Self {}
        })
    }
}

impl Lumen {
    /// Sets up process wide state, only the first call configures logging.
    pub fn new(app_name: &str) -> Self {
        LumenStatic::init(app_name);

        Self {
            app_name: app_name.to_owned(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Turns puffin scopes on or off and starts a new profiler frame.
    pub fn new_frame(&self, profile: bool) {
        puffin::set_scopes_on(profile);
        if profile {
            puffin::GlobalProfiler::lock().new_frame();
        }
    }
}
