/// Where one package manager keeps its cache, relative to the home directory
#[derive(Debug, Clone, Copy)]
pub struct CacheLocation {
    pub name: &'static str,
    pub linux: &'static str,
    pub windows: Option<&'static str>,
    pub macos: Option<&'static str>,
}

pub const CACHE_LOCATIONS: &[CacheLocation] = &[
    CacheLocation {
        name: "bower",
        linux: ".cache/bower/packages",
        windows: Some("AppData/Local/bower/packages"),
        macos: None,
    },
    CacheLocation {
        name: "bun",
        linux: ".bun/install/cache",
        windows: None,
        macos: None,
    },
    CacheLocation {
        name: "corepack",
        linux: ".cache/node/corepack",
        windows: Some("AppData/Local/node/corepack"),
        macos: None,
    },
    CacheLocation {
        name: "deno",
        linux: ".cache/deno",
        windows: Some("AppData/Local/deno"),
        macos: Some("Library/Caches/deno"),
    },
    CacheLocation {
        name: "npm",
        linux: ".npm/_cacache",
        windows: Some("AppData/Local/npm-cache/_cacache"),
        macos: None,
    },
    CacheLocation {
        name: "pnpm",
        linux: ".local/share/pnpm/store",
        windows: Some("AppData/Local/pnpm/store"),
        macos: Some("Library/pnpm/store"),
    },
    CacheLocation {
        name: "yarn classic",
        linux: ".cache/yarn",
        windows: Some("AppData/Local/Yarn/Cache"),
        macos: Some("Library/Caches/Yarn"),
    },
    CacheLocation {
        name: "yarn modern",
        linux: ".local/share/yarn/berry/cache",
        windows: Some("AppData/Local/Yarn/Berry/cache"),
        macos: Some(".yarn/berry/cache"),
    },
];
