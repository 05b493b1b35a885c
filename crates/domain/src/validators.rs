const MAX_DISPLAY_NAME_LEN: usize = 128;
const MAX_NODE_LEN: usize = 253;
/// Kernel interface names are limited to IFNAMSIZ - 1 bytes.
const MAX_LINK_NAME_LEN: usize = 15;

pub fn validate_node(node: &str) -> Result<(), String> {
    if node.trim().is_empty() {
        return Err("node cannot be empty".to_string());
    }
    if node.len() > MAX_NODE_LEN {
        return Err(format!("node cannot exceed {MAX_NODE_LEN} characters"));
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("displayName cannot be empty".to_string());
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(format!(
            "displayName cannot exceed {MAX_DISPLAY_NAME_LEN} characters"
        ));
    }
    Ok(())
}

/// Validates an interface or bridge name as the kernel would accept it.
pub fn validate_link_name(field: &str, name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    if name.len() > MAX_LINK_NAME_LEN {
        return Err(format!(
            "{field} cannot exceed {MAX_LINK_NAME_LEN} characters"
        ));
    }
    if name == "." || name == ".." {
        return Err(format!("{field} cannot be '{name}'"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '/' || c == ':') {
        return Err(format!(
            "{field} cannot contain whitespace, '/' or ':'"
        ));
    }
    Ok(())
}
