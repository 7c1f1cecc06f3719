// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint_build::CompilerConfiguration;
use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=SLINT_STYLE");

    let style = env::var("SLINT_STYLE").unwrap_or_else(|_| {
        if env::var("TARGET").unwrap().contains("android") { "material" } else { "fluent" }
            .to_string()
    });

    slint_build::compile_with_config("ui/index.slint", CompilerConfiguration::new().with_style(style))
        .unwrap();
}
