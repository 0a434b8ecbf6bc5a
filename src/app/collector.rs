//! Interactive collection of [`DeploymentParameters`].
//!
//! Every prompt has a default or a validated retry loop, so a run always ends
//! with a complete parameter set (or with [`AppError::InputClosed`] when the
//! operator's input runs out).

use tracing::debug;

use crate::domain::{
    AddonPath, AppError, Defaults, DeploymentParameters, OdooVersion, ParameterValues, YesNo,
};
use crate::ports::PromptChannel;

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid number.";
const INVALID_PORT: &str = "Invalid port. Please enter a number between 1 and 65535.";
const INVALID_YES_NO: &str = "Invalid input. Please enter 'Y' or 'N'";

/// Ask a yes/no question until the answer is `Y` or `N` (any case).
pub fn prompt_yes_no<P: PromptChannel>(prompt: &P, label: &str) -> Result<YesNo, AppError> {
    let mut answer = prompt.ask(&format!("{} (Y/N)", label))?;
    loop {
        if let Some(choice) = YesNo::parse(&answer) {
            return Ok(choice);
        }
        answer = prompt.ask(INVALID_YES_NO)?;
    }
}

/// Parameters a run would use if every prompt were answered with Enter.
pub fn parameters_from_defaults(defaults: &Defaults, version: OdooVersion) -> DeploymentParameters {
    DeploymentParameters::new(ParameterValues {
        odoo_version: version,
        port: defaults.port,
        postgres_version: defaults.postgres_version.clone(),
        postgres_db: defaults.postgres_db.clone(),
        postgres_user: defaults.postgres_user.clone(),
        postgres_password: defaults.postgres_password.clone(),
        admin_password: defaults.admin_password.clone(),
        extra_addons: AddonPath::extra_default(),
        enterprise_addons: AddonPath::enterprise_default(),
    })
}

/// Gathers a complete parameter set over a [`PromptChannel`].
pub struct ParameterCollector<'a, P: PromptChannel> {
    prompt: &'a P,
    defaults: &'a Defaults,
}

impl<'a, P: PromptChannel> ParameterCollector<'a, P> {
    pub fn new(prompt: &'a P, defaults: &'a Defaults) -> Self {
        Self { prompt, defaults }
    }

    /// Run every prompt in order and seal the result.
    pub fn collect(&self) -> Result<DeploymentParameters, AppError> {
        let odoo_version = self.select_application_version(&OdooVersion::ALL)?;
        let postgres_version =
            self.prompt_with_default("Enter PostgreSQL version", &self.defaults.postgres_version)?;
        let postgres_db =
            self.prompt_with_default("Enter PostgreSQL database name", &self.defaults.postgres_db)?;
        let postgres_user =
            self.prompt_with_default("Enter PostgreSQL user", &self.defaults.postgres_user)?;
        let postgres_password =
            self.prompt_with_default("Enter PostgreSQL password", &self.defaults.postgres_password)?;
        let port = self.prompt_port("Enter Odoo port", self.defaults.port)?;
        let admin_password =
            self.prompt_with_default("Enter master password", &self.defaults.admin_password)?;
        let enterprise_addons = self.prompt_conditional_path(
            "Do you want to use the current folder (./enterprise-addons) for the Enterprise Addons folder?",
            AddonPath::enterprise_default(),
            "Enter Enterprise Addons path",
        )?;
        let extra_addons = self.prompt_conditional_path(
            "Do you want to use the current folder (./addons) for the Extra Addons folder?",
            AddonPath::extra_default(),
            "Enter Extra Addons path",
        )?;

        debug!(version = %odoo_version, port, "parameters collected");

        Ok(DeploymentParameters::new(ParameterValues {
            odoo_version,
            port,
            postgres_version,
            postgres_db,
            postgres_user,
            postgres_password,
            admin_password,
            extra_addons,
            enterprise_addons,
        }))
    }

    /// Show a numbered menu and read a 1-based choice until it is in range.
    pub fn select_application_version(&self, options: &[OdooVersion]) -> Result<OdooVersion, AppError> {
        if options.is_empty() {
            return Err(AppError::config_error("No Odoo versions to choose from"));
        }

        self.prompt.say("Select an Odoo version:");
        for (index, version) in options.iter().enumerate() {
            self.prompt.say(&format!("{}. Version {}", index + 1, version));
        }

        let choices = (1..=options.len()).map(|i| i.to_string()).collect::<Vec<_>>().join("/");
        let label = format!("Enter your choice ({})", choices);

        loop {
            let answer = self.prompt.ask(&label)?;
            match answer.trim().parse::<i64>() {
                Ok(choice) if choice >= 1 && (choice as usize) <= options.len() => {
                    return Ok(options[choice as usize - 1]);
                }
                Ok(_) => self.prompt.say(INVALID_CHOICE),
                Err(_) => self.prompt.say(INVALID_NUMBER),
            }
        }
    }

    /// Return `default` for an empty answer, otherwise the answer as typed.
    pub fn prompt_with_default(&self, label: &str, default: &str) -> Result<String, AppError> {
        let answer = self.prompt.ask(&format!("{} (default: {})", label, default))?;
        if answer.is_empty() { Ok(default.to_string()) } else { Ok(answer) }
    }

    /// Like [`Self::prompt_with_default`], but the answer must be a usable port.
    pub fn prompt_port(&self, label: &str, default: u16) -> Result<u16, AppError> {
        let label = format!("{} (default: {})", label, default);
        loop {
            let answer = self.prompt.ask(&label)?;
            if answer.is_empty() {
                return Ok(default);
            }
            match answer.trim().parse::<u16>() {
                Ok(port) if port != 0 => return Ok(port),
                _ => self.prompt.say(INVALID_PORT),
            }
        }
    }

    pub fn prompt_yes_no(&self, label: &str) -> Result<YesNo, AppError> {
        prompt_yes_no(self.prompt, label)
    }

    /// `Y` keeps `default_path`; `N` asks for a path, taken as typed.
    pub fn prompt_conditional_path(
        &self,
        question: &str,
        default_path: AddonPath,
        path_label: &str,
    ) -> Result<AddonPath, AppError> {
        match self.prompt_yes_no(question)? {
            YesNo::Yes => Ok(default_path),
            YesNo::No => Ok(AddonPath::new(self.prompt.ask(path_label)?)),
        }
    }
}
