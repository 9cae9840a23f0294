use std::io::{self, Write};

use tabled::Tabled;

use crate::cli::{DeleteArgs, NameArgs};
use crate::controller::Gns3Controller;
use crate::error::{Gns3Error, Result};
use crate::output;
use crate::types::Project;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Path")]
    path: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            id: project.project_id.clone(),
            status: output::status_colored(&project.status),
            path: output::truncate(&project.path, 60),
        }
    }
}

pub async fn list(controller: &Gns3Controller) -> Result<()> {
    let projects = controller.projects().await?;

    output::print_table(&projects, |p| ProjectRow::from(p));

    Ok(())
}

pub async fn show(controller: &Gns3Controller, id: &str) -> Result<()> {
    let project = controller.project(id).await?;

    output::print_item(&project, |p| {
        println!("{}", p.name);
        println!("  ID:       {}", p.project_id);
        println!("  Status:   {}", output::status_colored(&p.status));
        println!("  Path:     {}", p.path);
        if let Some(filename) = &p.filename {
            println!("  File:     {filename}");
        }
        println!(
            "  Auto:     open={} start={} close={}",
            p.auto_open, p.auto_start, p.auto_close
        );
    });

    Ok(())
}

pub async fn delete(controller: &Gns3Controller, args: DeleteArgs) -> Result<()> {
    let project = controller.project(&args.id).await?;

    if !args.yes {
        print!(
            "Are you sure you want to delete the project ?\nName: {}\nID: {}\n[y/N] ",
            project.name, project.project_id
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            output::print_message("Aborted.");
            return Ok(());
        }
    }

    controller.delete_project(&project.project_id).await?;
    output::print_message(&format!("Deleted {} ({})", project.name, project.project_id));

    Ok(())
}

/// Trimmed project name; blank names are refused before anything is sent.
fn project_name(raw: &str) -> Result<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Gns3Error::InvalidName);
    }
    Ok(name)
}

pub async fn rename(controller: &Gns3Controller, args: NameArgs) -> Result<()> {
    let name = project_name(&args.name)?;
    let project = controller.rename(&args.id, name).await?;
    output::print_message(&format!("Renamed {} to {}", project.project_id, project.name));

    Ok(())
}

pub async fn duplicate(controller: &Gns3Controller, args: NameArgs) -> Result<()> {
    let name = project_name(&args.name)?;
    let project = controller.duplicate(&args.id, name).await?;
    output::print_message(&format!(
        "Duplicated {} as {} ({})",
        args.id, project.name, project.project_id
    ));

    Ok(())
}
