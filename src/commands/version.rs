use crate::controller::Gns3Controller;
use crate::error::Result;
use crate::output;

pub async fn show(controller: &Gns3Controller) -> Result<()> {
    let version = controller.version().await?;

    output::print_item(&version, |v| {
        let scope = if v.local { " (local)" } else { "" };
        println!("GNS3 {} at {}{scope}", v.version, controller.addr());
    });

    Ok(())
}
