use std::env;

fn main() {
    let target = env::var("TARGET").unwrap();

    // Configure for ATtiny85. Host builds (library unit tests) get no
    // MCU linker argument.
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=attiny85");
        println!("cargo:warning=Building for ATtiny85 at 4.8MHz");
    }

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=4800000");

    // Debug vs Release configurations
    if env::var("PROFILE").unwrap() == "debug" {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }
}
