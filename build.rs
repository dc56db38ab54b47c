fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    println!("cargo:rerun-if-env-changed=VFX_SDK_DIR");
    println!("cargo:rerun-if-env-changed=VFX_SDK_LIB");
    if std::env::var_os("CARGO_FEATURE_VENDOR_SDK").is_some() {
        if let Ok(dir) = std::env::var("VFX_SDK_DIR") {
            println!("cargo:rustc-link-search=native={}", dir);
        }
        let lib = std::env::var("VFX_SDK_LIB").unwrap_or_else(|_| "vfx".to_string());
        println!("cargo:rustc-link-lib=dylib={}", lib);
    }

    let config = cbindgen::Config::from_file("cbindgen.toml").unwrap_or_default();

    if let Ok(bindings) = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        bindings.write_to_file(format!("{}/include/vfx_hmd.h", crate_dir));
    }
}
