//! Info command - print the correlation interpretation guide.

use colored::Colorize;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Pearson correlation analysis".cyan().bold());
    println!();
    println!("{}", "Coefficient interpretation:".yellow().bold());
    for (range, meaning) in [
        (" 1.0", "perfect positive correlation"),
        (" 0.7 to  0.99", "very strong positive correlation"),
        (" 0.5 to  0.69", "strong positive correlation"),
        (" 0.3 to  0.49", "moderate positive correlation"),
        (" 0.1 to  0.29", "weak positive correlation"),
        ("-0.09 to 0.09", "no correlation"),
        ("-0.29 to -0.1", "weak negative correlation"),
        ("-0.49 to -0.3", "moderate negative correlation"),
        ("-0.69 to -0.5", "strong negative correlation"),
        ("-0.99 to -0.7", "very strong negative correlation"),
        ("-1.0", "perfect negative correlation"),
    ] {
        println!("  {range:14} {meaning}");
    }
    println!();
    println!("{}", "P-value interpretation:".yellow().bold());
    println!("  p < 0.05   statistically significant (95% confidence)");
    println!("  p >= 0.05  not statistically significant");
    println!();
    println!(
        "P-values computed in approximate mode are a monotonic proxy, not a\n\
         calibrated probability; use exact mode for true significance."
    );

    Ok(())
}
