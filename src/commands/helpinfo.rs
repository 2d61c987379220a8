//! `helpinfo` - long-form command reference

const HELP_TEXT: &str = "
devmate - Your Personal Dev Automation Assistant
------------------------------------------------
Usage:
  devmate COMMAND [ARGS]...

Commands and Examples:
  tf         Initialize a Terraform project with standard TF files.
             Example: devmate tf my_project

  docker     Scaffold a Docker configuration.
             Example: devmate docker my_project

  env        Create a Python virtual environment.
             Example: devmate env myenv

  test       Run tests using pytest.
             Example: devmate test path/to/tests

  doc        Set up documentation using Sphinx.
             Example: devmate doc my_project

  dep        Check for outdated Python dependencies.
             Example: devmate dep my_project

  scaffold   Scaffold a new project with boilerplate code.
             Example: devmate scaffold my_project

  mkdoc      Generate project documentation as a Markdown file.
             Example: devmate mkdoc

  cleanup    Clean up temporary files and directories.
             Example: devmate cleanup

  dashboard  Display real-time project metrics.
             Example: devmate dashboard [project_directory]

For detailed help on any command, run:
  devmate COMMAND --help
";

pub fn execute() {
    println!("{HELP_TEXT}");
}
