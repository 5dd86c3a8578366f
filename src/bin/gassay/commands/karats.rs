use anyhow::Result;

use crate::display::{print_karat_table, Context as DisplayContext};

// Fineness figures as actually struck on hallmarks, not exact 24ths;
// 22 K is marked 916, not 916.67.
const HALLMARKS: [(f64, u32); 6] = [
    (24.0, 999),
    (22.0, 916),
    (18.0, 750),
    (14.0, 585),
    (10.0, 417),
    (9.0, 375),
];

pub fn run_karats(ctx: DisplayContext) -> Result<()> {
    print_karat_table(ctx, &HALLMARKS);
    Ok(())
}
