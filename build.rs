fn main() {
    println!("cargo:rerun-if-changed=ui/slideshow-window.slint");

    slint_build::compile("ui/slideshow-window.slint").expect("Slint build failed");
}
