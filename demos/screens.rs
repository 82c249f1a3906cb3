use multiscreen::{
    is_process_dpi_aware, multi_monitor_support, primary_screen, screens, virtual_screen,
    virtual_screen_scaled, working_area, working_area_scaled,
};

fn main() -> multiscreen::Result<()> {
    println!("Multi-monitor support: {}", multi_monitor_support());
    println!("Process DPI aware: {}", is_process_dpi_aware());
    println!("Virtual screen: {}", virtual_screen());
    println!("Virtual screen (scaled): {}", virtual_screen_scaled()?);

    let primary = primary_screen()?;
    println!("Primary display: {primary}");

    let all = screens()?;
    println!("Displays ({})", all.len());
    for screen in all {
        println!("  {}", screen.device_name());
        println!("    primary: {}", screen.is_primary());
        println!("    bounds: {}", screen.bounds());
        println!("    working area: {}", working_area(&screen)?);
        println!("    scale factor: {}", screen.scale_factor());
        println!("    bounds (scaled): {}", screen.bounds_scaled());
        println!("    working area (scaled): {}", working_area_scaled(&screen)?);
    }

    Ok(())
}
