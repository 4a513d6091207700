use mp_protocol::PlatformInfo;

/// Copy a capability record, stripping what must not leave the process:
/// the content-injection entry point and any account session artifacts
/// under `accountInfo.extraData`. The input record is never mutated.
pub fn sanitize_platform_info(info: &PlatformInfo) -> PlatformInfo {
	let mut copy = info.clone();
	copy.inject_function = None;
	if let Some(account) = copy.account_info.as_mut() {
		account.extra_data = None;
	}
	copy
}
