// src/list.rs
use crate::registry::Template;

pub fn run_list() {
  println!("Available Blueprint Templates:");
  println!("{:<10} | {:<15} | {}", "Key", "Name", "Description");
  println!("{:-<10}-+-{:-<15}-+-{:-<50}", "", "", ""); // Separator

  for template in Template::ALL {
    println!(
      "{:<10} | {:<15} | {}",
      template.key(),
      template.name(),
      template.description()
    );
  }
}
