use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, 1, "database error");
const_error!(
    UPLOAD_ERROR,
    INTERNAL_SERVER_ERROR,
    2,
    "failed to store upload"
);
const_error!(VALIDATION_FAILED, BAD_REQUEST, 3, "invalid data");
const_error!(SHOW_NOT_FOUND, NOT_FOUND, 4, "Show not found");
const_error!(MULTIPART_INVALID, BAD_REQUEST, 5, "invalid multipart body");
const_error!(UNEXPECTED_FILE, BAD_REQUEST, 6, "unexpected file field");
const_error!(PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE, 7, "payload too large");
